//! Planar affine maps in homogeneous form
//!
//! A transform `(a, b, c, d, e, f)` is the matrix
//!
//! ```text
//! | a  b  e |
//! | c  d  f |
//! | 0  0  1 |
//! ```
//!
//! acting on column vectors `(x, y, 1)`. The weight `p` rides along for
//! the chaos game and has no effect on the geometry.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, array};

use crate::io::error::{IfsError, invalid_parameter};
use crate::spatial::polygon::{Point, Polygon};

/// Names of the seven editable fields of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Row 0, column 0
    A,
    /// Row 0, column 1
    B,
    /// Row 1, column 0
    C,
    /// Row 1, column 1
    D,
    /// Horizontal translation
    E,
    /// Vertical translation
    F,
    /// Selection weight
    P,
}

impl Parameter {
    /// The six matrix coefficients in validation order
    pub const COEFFICIENTS: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// All parameters, coefficients first
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::P,
    ];

    /// Single-letter name used in messages and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
            Self::P => "p",
        }
    }

    /// Whether the parameter is a matrix coefficient (bounded) rather than the weight
    pub const fn is_coefficient(self) -> bool {
        !matches!(self, Self::P)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = IfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|parameter| parameter.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_parameter("parameter", &s, &"expected one of a, b, c, d, e, f, p"))
    }
}

/// A weighted affine map
///
/// Values are not checked on construction; bounds are enforced when a
/// computation starts, so edits may pass through invalid states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    /// Row 0, column 0
    pub a: f64,
    /// Row 0, column 1
    pub b: f64,
    /// Row 1, column 0
    pub c: f64,
    /// Row 1, column 1
    pub d: f64,
    /// Horizontal translation
    pub e: f64,
    /// Vertical translation
    pub f: f64,
    /// Selection weight in continuous mode
    pub p: f64,
}

impl AffineTransform {
    /// Identity map with zero weight, the state of a freshly added transform
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);

    /// Create a transform from its coefficients and weight
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, p: f64) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            p,
        }
    }

    /// Read a single field
    pub const fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::A => self.a,
            Parameter::B => self.b,
            Parameter::C => self.c,
            Parameter::D => self.d,
            Parameter::E => self.e,
            Parameter::F => self.f,
            Parameter::P => self.p,
        }
    }

    /// Overwrite a single field in place
    pub const fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::A => self.a = value,
            Parameter::B => self.b = value,
            Parameter::C => self.c = value,
            Parameter::D => self.d = value,
            Parameter::E => self.e = value,
            Parameter::F => self.f = value,
            Parameter::P => self.p = value,
        }
    }

    /// Matrix coefficients paired with their names, in validation order
    pub fn coefficients(&self) -> [(Parameter, f64); 6] {
        Parameter::COEFFICIENTS.map(|parameter| (parameter, self.get(parameter)))
    }

    /// The 3×3 homogeneous matrix
    pub fn matrix(&self) -> Array2<f64> {
        array![
            [self.a, self.b, self.e],
            [self.c, self.d, self.f],
            [0.0, 0.0, 1.0]
        ]
    }

    /// Map a single point
    ///
    /// The homogeneous row `[0, 0, 1]` is applied implicitly, so the
    /// result keeps a third coordinate of exactly 1.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.a.mul_add(point.x, self.b * point.y) + self.e,
            self.c.mul_add(point.x, self.d * point.y) + self.f,
        )
    }

    /// Map every vertex of a polygon, keeping vertex order
    pub fn apply_polygon(&self, polygon: &Polygon) -> Polygon {
        polygon.transformed(&self.matrix())
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FromStr for AffineTransform {
    type Err = IfsError;

    /// Parse `a,b,c,d,e,f,p`; a missing weight defaults to zero
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|field| {
                field
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| invalid_parameter("transform", &s, &e))
            })
            .collect::<Result<Vec<f64>, IfsError>>()?;

        match values.as_slice() {
            [a, b, c, d, e, f] => Ok(Self::new(*a, *b, *c, *d, *e, *f, 0.0)),
            [a, b, c, d, e, f, p] => Ok(Self::new(*a, *b, *c, *d, *e, *f, *p)),
            _ => Err(invalid_parameter(
                "transform",
                &s,
                &format!("expected 6 or 7 comma-separated values, got {}", values.len()),
            )),
        }
    }
}
