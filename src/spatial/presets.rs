//! Named transform sets

use std::fmt;
use std::str::FromStr;

use crate::io::error::{IfsError, invalid_parameter};
use crate::math::affine::AffineTransform;
use crate::spatial::transform_set::TransformSet;

/// Built-in transform sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Preset {
    /// Three half-scale maps whose attractor is a Sierpinski triangle inside the unit square
    Sierpinski,
    /// Barnsley's fern with its classical weights
    Fern,
    /// A single identity map with weight one
    Identity,
}

impl Preset {
    /// All presets
    pub const ALL: [Self; 3] = [Self::Sierpinski, Self::Fern, Self::Identity];

    /// Lower-case name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sierpinski => "sierpinski",
            Self::Fern => "fern",
            Self::Identity => "identity",
        }
    }

    /// Build the transform set
    pub fn transform_set(self) -> TransformSet {
        match self {
            Self::Sierpinski => {
                let third = 1.0 / 3.0;
                TransformSet::from_transforms(vec![
                    AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.0, 0.0, third),
                    AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.25, 0.5, third),
                    AffineTransform::new(0.5, 0.0, 0.0, 0.5, 0.5, 0.0, third),
                ])
            }
            Self::Fern => TransformSet::from_transforms(vec![
                AffineTransform::new(0.0, 0.0, 0.0, 0.16, 0.0, 0.0, 0.01),
                AffineTransform::new(0.85, 0.04, -0.04, 0.85, 0.0, 1.6, 0.85),
                AffineTransform::new(0.2, -0.26, 0.23, 0.22, 0.0, 1.6, 0.07),
                AffineTransform::new(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44, 0.07),
            ]),
            Self::Identity => TransformSet::from_transforms(vec![AffineTransform {
                p: 1.0,
                ..AffineTransform::IDENTITY
            }]),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = IfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_parameter("preset", &s, &"expected sierpinski, fern or identity"))
    }
}
