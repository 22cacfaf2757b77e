//! Parameter and weight validation run before any geometry is computed
//!
//! Every check here is pure. The first violation aborts the whole
//! computation, so callers never see partial output.

use num_traits::ToPrimitive;

use crate::io::configuration::MIN_ITERATIONS;
use crate::io::error::{IfsError, Result, invalid_parameter, range_error};
use crate::math::probability::{uniform_weights, weight_sum};
use crate::spatial::transform_set::TransformSet;

/// What to do when weights do not form a probability distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// Abort the computation with an error
    Strict,
    /// Replace all weights by `1/k`, warn, and continue
    #[default]
    AutoNormalize,
}

/// Record of an automatic weight correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightCorrection {
    /// Sum of the weights as supplied
    pub original_sum: f64,
}

/// Weights accepted for sampling
#[derive(Debug, Clone, PartialEq)]
pub struct WeightCheck {
    /// Weights to sample with, in transform order
    pub weights: Vec<f64>,
    /// Present if the supplied weights were replaced
    pub correction: Option<WeightCorrection>,
}

fn as_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Check `min <= value <= max`
///
/// Unordered values such as NaN fail the check.
///
/// # Errors
///
/// Returns [`IfsError::Range`] if the value lies outside the inclusive bounds
pub fn validate_parameter<T>(parameter: &'static str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + ToPrimitive + Copy,
{
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(range_error(
            parameter,
            as_f64(value),
            as_f64(min),
            as_f64(max),
        ))
    }
}

/// Check every coefficient of every transform against the bounds
///
/// Transforms are checked in index order and coefficients in the order
/// `a, b, c, d, e, f`. Weights are not bounded here.
///
/// # Errors
///
/// Returns the first [`IfsError::Range`] found, tagged with the transform index
pub fn validate_transforms(set: &TransformSet, min: f64, max: f64) -> Result<()> {
    for (index, transform) in set.iter().enumerate() {
        for (parameter, value) in transform.coefficients() {
            validate_parameter(parameter.name(), value, min, max)
                .map_err(|error| error.at_transform(index))?;
        }
    }
    Ok(())
}

/// Check the transform count against the ceiling
///
/// # Errors
///
/// Returns [`IfsError::Range`] for parameter `transforms` if the set is too large
pub fn validate_transform_count(count: usize, max: usize) -> Result<()> {
    validate_parameter("transforms", count, 0, max).map(|_| ())
}

/// Check an iteration count against `[1, max]`
///
/// # Errors
///
/// Returns [`IfsError::Range`] for parameter `iterations` if out of range
pub fn validate_iterations(iterations: usize, max: usize) -> Result<()> {
    validate_parameter("iterations", iterations, MIN_ITERATIONS, max).map(|_| ())
}

/// Check that a weight sum tolerance is a finite, non-negative number
///
/// # Errors
///
/// Returns [`IfsError::InvalidParameter`] for parameter `tolerance` otherwise
pub fn validate_tolerance(tolerance: f64) -> Result<f64> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(invalid_parameter(
            "tolerance",
            &tolerance,
            &"must be a finite, non-negative number",
        ))
    }
}

/// Check that weights form a probability distribution
///
/// Weights must be finite, non-negative, not all zero, and sum to one
/// within `tolerance` (a tolerance of zero demands exact equality).
/// Under [`WeightPolicy::AutoNormalize`] a failing set is replaced by
/// uniform weights and a warning is logged.
///
/// # Errors
///
/// Returns [`IfsError::InvalidParameter`] if `tolerance` is negative or
/// not finite, whatever the policy. Under [`WeightPolicy::Strict`],
/// returns [`IfsError::NegativeWeight`] for the first negative or
/// non-finite weight, otherwise [`IfsError::Probability`] if the sum is
/// off or every weight is zero
pub fn validate_weights(weights: &[f64], policy: WeightPolicy, tolerance: f64) -> Result<WeightCheck> {
    validate_tolerance(tolerance)?;
    if weights.is_empty() {
        return Ok(WeightCheck {
            weights: Vec::new(),
            correction: None,
        });
    }

    let sum = weight_sum(weights);
    let invalid = weights
        .iter()
        .position(|weight| !weight.is_finite() || *weight < 0.0);
    // All-zero weights are never a distribution, whatever the tolerance
    let has_mass = weights.iter().any(|weight| *weight > 0.0);
    let sum_matches = has_mass && (sum - 1.0).abs() <= tolerance;

    if invalid.is_none() && sum_matches {
        return Ok(WeightCheck {
            weights: weights.to_vec(),
            correction: None,
        });
    }

    match policy {
        WeightPolicy::Strict => match invalid {
            Some(transform) => Err(IfsError::NegativeWeight {
                transform,
                weight: weights.get(transform).copied().unwrap_or(f64::NAN),
            }),
            None => Err(IfsError::Probability { sum }),
        },
        WeightPolicy::AutoNormalize => {
            log::warn!(
                "Probabilities do not add up to one (sum = {sum}); using uniform weights 1/{}",
                weights.len()
            );
            Ok(WeightCheck {
                weights: uniform_weights(weights.len()),
                correction: Some(WeightCorrection { original_sum: sum }),
            })
        }
    }
}
