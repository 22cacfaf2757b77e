//! Deterministic polygon subdivision (discrete mode)
//!
//! Every round applies every transform to every polygon of the previous
//! round, so `k` transforms and `N` rounds yield `k^N` polygons. Each
//! output polygon is labeled with the transform applied in the last round
//! only; earlier rounds do not affect the label.

use crate::algorithm::engine::EngineConfig;
use crate::algorithm::validation::{
    validate_iterations, validate_transform_count, validate_transforms,
};
use crate::io::error::{Result, invalid_parameter, range_error};
use crate::spatial::geometry::LabeledPolygon;
use crate::spatial::polygon::Polygon;
use crate::spatial::transform_set::TransformSet;

/// Number of polygons produced by `rounds` rounds over `transform_count` transforms
///
/// Returns `None` if the count does not fit in `usize`.
pub fn output_size(transform_count: usize, rounds: usize) -> Option<usize> {
    let rounds = u32::try_from(rounds).ok()?;
    transform_count.checked_pow(rounds)
}

/// Run the subdivision without validation
///
/// Starts from the seed labeled `0`; with zero rounds the seed itself is
/// returned. With no transforms the result is empty after the first round.
pub fn subdivide(set: &TransformSet, seed: &Polygon, rounds: usize) -> Vec<LabeledPolygon> {
    let matrices = set.matrices();

    let mut working = vec![LabeledPolygon {
        label: 0,
        polygon: seed.clone(),
    }];

    for _ in 0..rounds {
        let mut next = Vec::with_capacity(working.len().saturating_mul(matrices.len()));
        for item in &working {
            for (label, matrix) in matrices.iter().enumerate() {
                next.push(LabeledPolygon {
                    label,
                    polygon: item.polygon.transformed(matrix),
                });
            }
        }
        working = next;
    }

    working
}

/// Validating front for [`subdivide`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteSubdivider {
    config: EngineConfig,
}

impl DiscreteSubdivider {
    /// Create a subdivider with the given limits
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Limits in use
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate inputs, then subdivide `seed` for `iterations` rounds
    ///
    /// Weights play no part in discrete mode and are not checked.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The set holds more transforms than the configured ceiling
    /// - `iterations` lies outside `[1, max_discrete_iterations]`
    /// - `k^iterations` polygons would exceed `max_discrete_output`
    /// - The seed polygon has no vertices
    /// - Any coefficient of any transform lies outside the configured bounds
    pub fn compute(
        &self,
        set: &TransformSet,
        seed: &Polygon,
        iterations: usize,
    ) -> Result<Vec<LabeledPolygon>> {
        self.validate(set, seed, iterations)?;

        log::debug!(
            "Subdividing {} vertex seed with {} transforms for {iterations} rounds",
            seed.len(),
            set.len()
        );
        let polygons = subdivide(set, seed, iterations);
        log::debug!("Subdivision produced {} polygons", polygons.len());

        Ok(polygons)
    }

    /// Subdivide several seeds independently
    ///
    /// All seeds are validated before any is subdivided. The result holds
    /// one polygon list per seed, in seed order.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::compute`] for the first invalid seed
    pub fn compute_many(
        &self,
        set: &TransformSet,
        seeds: &[Polygon],
        iterations: usize,
    ) -> Result<Vec<Vec<LabeledPolygon>>> {
        for seed in seeds {
            self.validate(set, seed, iterations)?;
        }
        Ok(seeds
            .iter()
            .map(|seed| subdivide(set, seed, iterations))
            .collect())
    }

    fn validate(&self, set: &TransformSet, seed: &Polygon, iterations: usize) -> Result<()> {
        validate_transform_count(set.len(), self.config.max_transforms)?;
        validate_iterations(iterations, self.config.max_discrete_iterations)?;
        let total = output_size(set.len(), iterations);
        if total.is_none_or(|count| count > self.config.max_discrete_output) {
            return Err(range_error(
                "polygons",
                total.map_or(f64::INFINITY, |count| count as f64),
                0.0,
                self.config.max_discrete_output as f64,
            ));
        }
        if seed.is_empty() {
            return Err(invalid_parameter(
                "seed",
                &"[]",
                &"seed polygon needs at least one vertex",
            ));
        }
        validate_transforms(set, self.config.coefficient_min, self.config.coefficient_max)
    }
}
