//! Randomized point iteration (continuous mode, the chaos game)
//!
//! Starting at the origin, each step draws a transform index from the
//! weight distribution and maps the running point with it. Draws are
//! independent; only the point carries state between steps.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::engine::EngineConfig;
use crate::algorithm::validation::{
    WeightCorrection, validate_iterations, validate_transform_count, validate_transforms,
    validate_weights,
};
use crate::io::error::Result;
use crate::math::probability::WeightedSelector;
use crate::spatial::geometry::LabeledPoint;
use crate::spatial::polygon::Point;
use crate::spatial::transform_set::TransformSet;

/// Sampled points plus the weights that produced them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    /// Labeled points in sampling order
    pub points: Vec<LabeledPoint>,
    /// Weights actually sampled with, in transform order
    pub weights: Vec<f64>,
    /// Present if the supplied weights were replaced by uniform ones
    pub correction: Option<WeightCorrection>,
}

/// Run the chaos game without validation
///
/// `selector` must have been built from weights for exactly the
/// transforms in `set`.
pub fn sample_trajectory<R: Rng + ?Sized>(
    set: &TransformSet,
    selector: &WeightedSelector,
    iterations: usize,
    rng: &mut R,
) -> Vec<LabeledPoint> {
    let mut point = Point::ORIGIN;
    let mut points = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let label = selector.choose(rng);
        let Some(transform) = set.get(label) else {
            continue;
        };
        point = transform.apply(point);
        points.push(LabeledPoint { label, point });
    }

    points
}

/// Validating front for [`sample_trajectory`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaosGameSampler {
    config: EngineConfig,
}

impl ChaosGameSampler {
    /// Create a sampler with the given limits and weight policy
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Limits and weight policy in use
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate inputs, then sample `iterations` points with the given generator
    ///
    /// An empty set yields an empty trajectory without checking weights.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The set holds more transforms than the configured ceiling
    /// - `iterations` lies outside `[1, max_continuous_iterations]`
    /// - Any coefficient of any transform lies outside the configured bounds
    /// - The weights are invalid under the strict policy
    pub fn compute<R: Rng + ?Sized>(
        &self,
        set: &TransformSet,
        iterations: usize,
        rng: &mut R,
    ) -> Result<Trajectory> {
        validate_transform_count(set.len(), self.config.max_transforms)?;
        validate_iterations(iterations, self.config.max_continuous_iterations)?;

        if set.is_empty() {
            return Ok(Trajectory::default());
        }

        validate_transforms(set, self.config.coefficient_min, self.config.coefficient_max)?;
        let check = validate_weights(
            &set.weights(),
            self.config.weight_policy,
            self.config.weight_tolerance,
        )?;
        let selector = WeightedSelector::new(&check.weights)?;

        log::debug!(
            "Sampling {iterations} points from {} transforms",
            set.len()
        );
        let points = sample_trajectory(set, &selector, iterations, rng);

        Ok(Trajectory {
            points,
            weights: check.weights,
            correction: check.correction,
        })
    }

    /// Like [`Self::compute`] with a generator seeded from `seed`
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::compute`]
    pub fn compute_seeded(
        &self,
        set: &TransformSet,
        iterations: usize,
        seed: u64,
    ) -> Result<Trajectory> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.compute(set, iterations, &mut rng)
    }
}
