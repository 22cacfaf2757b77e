//! Engine configuration and mode dispatch
//!
//! The engine keeps no state between calls: every computation borrows the
//! caller's transform set, validates it, and returns owned geometry.

use std::fmt;

use rand::Rng;

use crate::algorithm::chaos::ChaosGameSampler;
use crate::algorithm::subdivision::DiscreteSubdivider;
use crate::algorithm::validation::{WeightCorrection, WeightPolicy};
use crate::io::configuration::{
    DEFAULT_COEFFICIENT_MAX, DEFAULT_COEFFICIENT_MIN, DEFAULT_WEIGHT_TOLERANCE,
    MAX_CONTINUOUS_ITERATIONS, MAX_DISCRETE_ITERATIONS, MAX_DISCRETE_OUTPUT, MAX_TRANSFORMS,
};
use crate::io::error::Result;
use crate::spatial::geometry::Geometry;
use crate::spatial::polygon::Polygon;
use crate::spatial::transform_set::TransformSet;

/// Bounds, ceilings and weight handling for both algorithms
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Inclusive lower bound for coefficients `a..f`
    pub coefficient_min: f64,
    /// Inclusive upper bound for coefficients `a..f`
    pub coefficient_max: f64,
    /// Reaction to weights that are not a probability distribution
    pub weight_policy: WeightPolicy,
    /// Accepted absolute deviation of the weight sum from one
    pub weight_tolerance: f64,
    /// Largest accepted transform set
    pub max_transforms: usize,
    /// Largest accepted subdivision depth
    pub max_discrete_iterations: usize,
    /// Largest accepted chaos game length
    pub max_continuous_iterations: usize,
    /// Largest accepted number of polygons from one subdivision
    pub max_discrete_output: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            coefficient_min: DEFAULT_COEFFICIENT_MIN,
            coefficient_max: DEFAULT_COEFFICIENT_MAX,
            weight_policy: WeightPolicy::AutoNormalize,
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
            max_transforms: MAX_TRANSFORMS,
            max_discrete_iterations: MAX_DISCRETE_ITERATIONS,
            max_continuous_iterations: MAX_CONTINUOUS_ITERATIONS,
            max_discrete_output: MAX_DISCRETE_OUTPUT,
        }
    }
}

impl EngineConfig {
    /// Same configuration with the strict weight policy
    #[must_use]
    pub const fn strict(self) -> Self {
        Self {
            weight_policy: WeightPolicy::Strict,
            ..self
        }
    }
}

/// Which algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Mode {
    /// Polygon subdivision
    #[default]
    Discrete,
    /// Chaos game point sampling
    Continuous,
}

impl Mode {
    /// Largest accepted iteration count for this mode
    pub const fn max_iterations(self, config: &EngineConfig) -> usize {
        match self {
            Self::Discrete => config.max_discrete_iterations,
            Self::Continuous => config.max_continuous_iterations,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete => f.write_str("discrete"),
            Self::Continuous => f.write_str("continuous"),
        }
    }
}

/// Result of a single engine call
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    /// Labeled polygons or points
    pub geometry: Geometry,
    /// Present if continuous mode replaced the weights with uniform ones
    pub correction: Option<WeightCorrection>,
}

/// Entry point dispatching to subdivision or the chaos game
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one computation
    ///
    /// `seed` is used in discrete mode only and defaults to the unit
    /// square; `rng` is used in continuous mode only.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`DiscreteSubdivider::compute`] or
    /// [`ChaosGameSampler::compute`]; no geometry accompanies an error
    pub fn compute<R: Rng + ?Sized>(
        &self,
        set: &TransformSet,
        mode: Mode,
        iterations: usize,
        seed: Option<&Polygon>,
        rng: &mut R,
    ) -> Result<Computation> {
        log::debug!(
            "Computing {mode} geometry for {} transforms, {iterations} iterations",
            set.len()
        );

        match mode {
            Mode::Discrete => {
                let subdivider = DiscreteSubdivider::new(self.config);
                let polygons = match seed {
                    Some(polygon) => subdivider.compute(set, polygon, iterations)?,
                    None => subdivider.compute(set, &Polygon::unit_square(), iterations)?,
                };
                Ok(Computation {
                    geometry: Geometry::Polygons(polygons),
                    correction: None,
                })
            }
            Mode::Continuous => {
                let trajectory = ChaosGameSampler::new(self.config).compute(set, iterations, rng)?;
                Ok(Computation {
                    geometry: Geometry::Points(trajectory.points),
                    correction: trajectory.correction,
                })
            }
        }
    }
}
