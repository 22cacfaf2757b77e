//! Weight arithmetic and categorical sampling over transform indices

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::io::error::{IfsError, Result};

/// Sum of all weights
///
/// Summed left to right so the result matches a plain running total
/// of the values in order.
pub fn weight_sum(weights: &[f64]) -> f64 {
    weights.iter().fold(0.0, |total, weight| total + weight)
}

/// Uniform weights `1/k` for `k` transforms
pub fn uniform_weights(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    vec![1.0 / count as f64; count]
}

/// Empirical frequency of each label among `count` labels
///
/// Labels outside `0..count` are ignored.
pub fn label_frequencies(labels: impl IntoIterator<Item = usize>, count: usize) -> Vec<f64> {
    let mut tally = vec![0_usize; count];
    let mut total = 0_usize;
    for label in labels {
        if let Some(slot) = tally.get_mut(label) {
            *slot += 1;
            total += 1;
        }
    }
    if total == 0 {
        return vec![0.0; count];
    }
    tally
        .into_iter()
        .map(|hits| hits as f64 / total as f64)
        .collect()
}

/// Independent weighted draws of transform indices
///
/// Each draw returns index `i` with probability `weight_i / sum(weights)`
/// and keeps no memory of earlier draws.
#[derive(Debug, Clone)]
pub struct WeightedSelector {
    distribution: WeightedIndex<f64>,
}

impl WeightedSelector {
    /// Build a selector from validated weights
    ///
    /// # Errors
    ///
    /// Returns an error if the weights are empty, contain a negative or
    /// non-finite value, or are all zero
    pub fn new(weights: &[f64]) -> Result<Self> {
        let distribution = WeightedIndex::new(weights).map_err(|e| IfsError::Sampling {
            reason: e.to_string(),
        })?;
        Ok(Self { distribution })
    }

    /// Draw one index
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.distribution.sample(rng)
    }
}
