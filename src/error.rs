// Contract violations in the signature pipeline.
//
// Empty texts and zero-width normalization ranges are not errors; they have
// defined 0.0 results. What is an error is mixing vectors of different
// shapes, or handing the classifier weights it cannot use.

use thiserror::Error;

use crate::signature::Feature;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("Feature vector length mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Feature weight at index {index} must be positive and finite, got {value}")]
    InvalidWeight { index: usize, value: f64 },

    #[error("A feature set needs at least one feature")]
    EmptyFeatureSet,

    #[error("Feature {0} appears more than once in the feature set")]
    DuplicateFeature(Feature),

    #[error("Unknown feature name: {0}")]
    UnknownFeature(String),

    #[error("Unknown signature variant: {0} (expected `baseline` or `extended`)")]
    UnknownVariant(String),
}

impl FeatureError {
    /// Shorthand used by every length check in the crate.
    pub(crate) fn check_dims(
        context: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<(), FeatureError> {
        if expected == found {
            Ok(())
        } else {
            Err(FeatureError::DimensionMismatch {
                context,
                expected,
                found,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dims() {
        assert!(FeatureError::check_dims("test", 3, 3).is_ok());
        let err = FeatureError::check_dims("weights", 6, 3).unwrap_err();
        assert_eq!(
            err,
            FeatureError::DimensionMismatch {
                context: "weights",
                expected: 6,
                found: 3
            }
        );
        assert!(err.to_string().contains("expected 6, found 3"));
    }
}
