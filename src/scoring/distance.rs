// Weighted Euclidean distance between signatures.
//
//   distance = sqrt( sum_i  w[i] * (a[i] - b[i])^2 )
//
// With no weights every dimension counts 1.0. Weights must match the
// signature arity; a mismatch is an error, never a silent truncation.

use serde::Serialize;

use crate::error::FeatureError;
use crate::signature::Signature;

/// Per-dimension multipliers applied to squared differences.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureWeights {
    values: Vec<f64>,
}

impl FeatureWeights {
    /// Every weight must be positive and finite.
    pub fn new(values: Vec<f64>) -> Result<Self, FeatureError> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0)
        {
            return Err(FeatureError::InvalidWeight { index, value });
        }
        Ok(Self { values })
    }

    /// Weight 1.0 on every dimension.
    pub fn uniform(dims: usize) -> Self {
        Self {
            values: vec![1.0; dims],
        }
    }

    /// Hand-tuned weights for the extended six-feature signature.
    ///
    /// Order: average word length, different/total, once/total,
    /// long-word share, short-word share, unique-long ratio.
    pub fn tuned_extended() -> Self {
        Self {
            values: vec![8.0, 18.0, 8.0, 1.0, 1.0, 15.0],
        }
    }

    pub fn dims(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Weighted Euclidean distance; `None` weights means 1.0 everywhere.
pub fn weighted_euclidean(
    a: &Signature,
    b: &Signature,
    weights: Option<&FeatureWeights>,
) -> Result<f64, FeatureError> {
    let diffs = a.squared_diffs(b)?;
    let sum: f64 = match weights {
        Some(w) => {
            FeatureError::check_dims("feature weights", a.dims(), w.dims())?;
            diffs.iter().zip(w.values()).map(|(d, w)| d * w).sum()
        }
        None => diffs.iter().sum(),
    };
    Ok(sum.sqrt())
}
