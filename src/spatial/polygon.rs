//! Homogeneous points and polygons
//!
//! Polygons keep their vertices as a 3×n matrix whose columns are
//! `(x, y, 1)`, so a transform is applied to every vertex with one
//! matrix product. Column order is drawing order.

use ndarray::{Array2, ArrayView2};

/// A 2D point in homogeneous form `(x, y, 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// The homogeneous origin `(0, 0, 1)`, start of every chaos game
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a point from its cartesian coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Homogeneous coordinates; the third entry is always exactly 1
    pub const fn homogeneous(self) -> [f64; 3] {
        [self.x, self.y, 1.0]
    }

    /// Cartesian pair as handed to the presentation layer
    pub const fn to_pair(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered sequence of vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Array2<f64>,
}

impl Polygon {
    /// Build a polygon from vertices in drawing order
    pub fn new(points: &[Point]) -> Self {
        let vertices = Array2::from_shape_fn((3, points.len()), |(row, col)| {
            points.get(col).map_or(1.0, |point| match row {
                0 => point.x,
                1 => point.y,
                _ => 1.0,
            })
        });
        Self { vertices }
    }

    /// Build a polygon from `(x, y)` pairs in drawing order
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let points: Vec<Point> = pairs.iter().copied().map(Point::from).collect();
        Self::new(&points)
    }

    /// The default seed: corners `(0,0), (0,1), (1,1), (1,0)`
    pub fn unit_square() -> Self {
        Self::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    /// Apply a 3×3 homogeneous matrix to every vertex
    ///
    /// A matrix whose last row is `[0, 0, 1]` keeps every third
    /// coordinate at exactly 1.
    pub fn transformed(&self, matrix: &Array2<f64>) -> Self {
        Self {
            vertices: matrix.dot(&self.vertices),
        }
    }

    /// Vertex matrix, one homogeneous column per vertex
    pub fn homogeneous(&self) -> ArrayView2<'_, f64> {
        self.vertices.view()
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.ncols()
    }

    /// Whether the polygon has no vertices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate vertices in drawing order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices
            .row(0)
            .into_iter()
            .zip(self.vertices.row(1))
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// Vertex at the given position, if any
    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.points().nth(index)
    }

    /// Vertices as `(x, y)` pairs
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points().map(Point::to_pair).collect()
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::unit_square()
    }
}
