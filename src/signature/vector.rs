// Signature: a checked, fixed-arity feature vector.
//
// The arity is fixed at construction. Every operation that pairs two
// vectors checks lengths first and returns a DimensionMismatch instead of
// zipping to the shorter one.

use std::ops::Index;

use serde::Serialize;

use crate::error::FeatureError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Signature {
    values: Vec<f64>,
}

impl Signature {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The all-zero signature of the given arity.
    pub fn zeros(dims: usize) -> Self {
        Self {
            values: vec![0.0; dims],
        }
    }

    pub fn dims(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Fail unless `other` has the same arity.
    pub fn ensure_same_dims(
        &self,
        other: &Signature,
        context: &'static str,
    ) -> Result<(), FeatureError> {
        FeatureError::check_dims(context, self.dims(), other.dims())
    }

    /// Per-dimension squared differences, length-checked.
    pub fn squared_diffs(&self, other: &Signature) -> Result<Vec<f64>, FeatureError> {
        self.ensure_same_dims(other, "signature comparison")?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).powi(2))
            .collect())
    }
}

impl Index<usize> for Signature {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl From<Vec<f64>> for Signature {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_diffs() {
        let a = Signature::new(vec![1.0, 2.0, 3.0]);
        let b = Signature::new(vec![1.0, 0.0, 6.0]);
        assert_eq!(a.squared_diffs(&b).unwrap(), vec![0.0, 4.0, 9.0]);
    }

    #[test]
    fn test_squared_diffs_rejects_mismatched_lengths() {
        let a = Signature::zeros(3);
        let b = Signature::zeros(6);
        assert_eq!(
            a.squared_diffs(&b),
            Err(FeatureError::DimensionMismatch {
                context: "signature comparison",
                expected: 3,
                found: 6,
            })
        );
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let sig = Signature::new(vec![0.5, 1.0]);
        assert_eq!(serde_json::to_string(&sig).unwrap(), "[0.5,1.0]");
    }
}
