// AuthorModel: everything one attribution run needs, fitted once.
//
// Holds the feature set, the known-author signatures (normalized when
// configured), the bounds they were normalized with, and the distance
// weights. Every unknown text scored through the same model sees the same
// bounds.

use std::collections::BTreeMap;

use tracing::info;

use super::classify::{self, Guess};
use super::distance::FeatureWeights;
use super::normalize::{self, Bounds};
use crate::error::FeatureError;
use crate::signature::{build_signatures, signature_of_text, FeatureSet, Signature, Signatures, Variant};

/// How to sign and compare texts.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub features: FeatureSet,
    /// Min-max normalize each dimension across the known authors
    pub normalize: bool,
    /// Per-dimension distance weights (1.0 everywhere when absent)
    pub weights: Option<FeatureWeights>,
}

impl ModelConfig {
    /// Three features, raw values, unweighted distance.
    pub fn baseline() -> Self {
        Self {
            features: FeatureSet::baseline(),
            normalize: false,
            weights: None,
        }
    }

    /// Six features, normalized, with the tuned weights.
    pub fn extended() -> Self {
        Self {
            features: FeatureSet::extended(),
            normalize: true,
            weights: Some(FeatureWeights::tuned_extended()),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Baseline => Self::baseline(),
            Variant::Extended => Self::extended(),
        }
    }

    /// Weights, if any, must cover exactly the configured features.
    pub fn validate(&self) -> Result<(), FeatureError> {
        if let Some(w) = &self.weights {
            FeatureError::check_dims("feature weights", self.features.len(), w.dims())?;
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::extended()
    }
}

pub struct AuthorModel {
    config: ModelConfig,
    raw: Signatures,
    signatures: Signatures,
    bounds: Option<Bounds>,
}

impl AuthorModel {
    /// Sign a raw-text corpus and fit the model.
    pub fn fit(corpus: &BTreeMap<String, String>, config: ModelConfig) -> Result<Self, FeatureError> {
        config.validate()?;
        let raw = build_signatures(corpus, &config.features);
        Self::from_signatures(raw, config)
    }

    /// Fit from signatures that were already computed with `config.features`.
    pub fn from_signatures(raw: Signatures, config: ModelConfig) -> Result<Self, FeatureError> {
        config.validate()?;
        for sig in raw.values() {
            FeatureError::check_dims("known signature", config.features.len(), sig.dims())?;
        }

        let (signatures, bounds) = if config.normalize {
            let (normalized, bounds) = normalize::normalize_corpus(&raw)?;
            (normalized, Some(bounds))
        } else {
            (raw.clone(), None)
        };

        info!(
            authors = signatures.len(),
            dims = config.features.len(),
            normalized = config.normalize,
            weighted = config.weights.is_some(),
            "Fitted author model"
        );

        Ok(Self {
            config,
            raw,
            signatures,
            bounds,
        })
    }

    pub fn features(&self) -> &FeatureSet {
        &self.config.features
    }

    /// Known signatures before normalization.
    pub fn raw_signatures(&self) -> &Signatures {
        &self.raw
    }

    /// Known signatures as compared by the classifier.
    pub fn signatures(&self) -> &Signatures {
        &self.signatures
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// The unknown text's signature in the classifier's space.
    pub fn signature_for(&self, text: &str) -> Result<Signature, FeatureError> {
        let raw = signature_of_text(text, &self.config.features);
        match &self.bounds {
            Some(b) => b.apply(&raw),
            None => Ok(raw),
        }
    }

    /// Closest known author, or `None` for an empty model.
    pub fn guess(&self, text: &str) -> Result<Option<Guess>, FeatureError> {
        classify::guess_author(
            text,
            &self.signatures,
            &self.config.features,
            self.bounds.as_ref(),
            self.config.weights.as_ref(),
        )
    }

    /// All known authors by distance, closest first.
    pub fn rank(&self, text: &str) -> Result<Vec<Guess>, FeatureError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let unknown = self.signature_for(text)?;
        classify::rank(&unknown, &self.signatures, self.config.weights.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(a, t)| (a.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_rejects_short_weights() {
        let config = ModelConfig {
            features: FeatureSet::extended(),
            normalize: true,
            weights: Some(FeatureWeights::uniform(3)),
        };
        assert!(AuthorModel::fit(&BTreeMap::new(), config).is_err());
    }

    #[test]
    fn test_extended_model_fits_bounds() {
        let model = AuthorModel::fit(
            &corpus(&[
                ("short", "a an the cat sat on a mat"),
                ("long", "extraordinary circumstances necessitated considerable deliberation"),
            ]),
            ModelConfig::extended(),
        )
        .unwrap();
        let bounds = model.bounds().unwrap();
        assert_eq!(bounds.dims(), 6);
        for sig in model.signatures().values() {
            assert!(sig.values().iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_baseline_model_keeps_raw_values() {
        let model = AuthorModel::fit(&corpus(&[("a", "hello world")]), ModelConfig::baseline()).unwrap();
        assert!(model.bounds().is_none());
        assert_eq!(model.signatures(), model.raw_signatures());
    }

    #[test]
    fn test_empty_model_guesses_none() {
        let model = AuthorModel::fit(&BTreeMap::new(), ModelConfig::extended()).unwrap();
        assert!(model.guess("anything at all").unwrap().is_none());
        assert!(model.rank("anything at all").unwrap().is_empty());
    }

    #[test]
    fn test_from_signatures_checks_arity() {
        let raw = Signatures::from([("a".to_string(), Signature::zeros(3))]);
        assert!(AuthorModel::from_signatures(raw, ModelConfig::extended()).is_err());
    }
}
