use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::{FeatureWeights, ModelConfig};
use crate::signature::{FeatureSet, Variant};

pub const DEFAULT_KNOWN_DIR: &str = "./known_authors";

/// Run configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags override
/// whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory of known-author `.txt` files (AUTHORSHIP_KNOWN_DIR)
    pub known_dir: PathBuf,
    /// Which standard signature to compute (AUTHORSHIP_VARIANT)
    pub variant: Variant,
    /// Custom feature list overriding the variant (AUTHORSHIP_FEATURES)
    pub features: Option<FeatureSet>,
    /// Explicit distance weights (AUTHORSHIP_WEIGHTS, comma-separated)
    pub weights: Option<Vec<f64>>,
    /// Normalize features across known authors (AUTHORSHIP_NORMALIZE).
    /// Unset means "follow the variant".
    pub normalize: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            known_dir: PathBuf::from(DEFAULT_KNOWN_DIR),
            variant: Variant::default(),
            features: None,
            weights: None,
            normalize: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; `load` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let variant = match lookup("AUTHORSHIP_VARIANT") {
            Some(v) => v.parse::<Variant>().context("Invalid AUTHORSHIP_VARIANT")?,
            None => Variant::default(),
        };

        let features = lookup("AUTHORSHIP_FEATURES")
            .map(|list| FeatureSet::parse_list(&list))
            .transpose()
            .context("Invalid AUTHORSHIP_FEATURES")?;

        let weights = lookup("AUTHORSHIP_WEIGHTS")
            .map(|list| parse_weights(&list))
            .transpose()
            .context("Invalid AUTHORSHIP_WEIGHTS")?;

        let normalize = lookup("AUTHORSHIP_NORMALIZE")
            .map(|v| parse_bool(&v))
            .transpose()
            .context("Invalid AUTHORSHIP_NORMALIZE")?;

        Ok(Self {
            known_dir: lookup("AUTHORSHIP_KNOWN_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_KNOWN_DIR)),
            variant,
            features,
            weights,
            normalize,
        })
    }

    /// Resolve into a validated model configuration.
    ///
    /// The variant supplies the defaults; an explicit feature list, weight
    /// list or normalize flag replaces the matching part. A custom feature
    /// list drops the variant's tuned weights unless weights are given.
    pub fn to_model_config(&self) -> Result<ModelConfig> {
        let mut model = ModelConfig::for_variant(self.variant);

        if self.features.is_some() {
            model.features = self.feature_set();
            model.weights = None;
        }
        if let Some(weights) = &self.weights {
            model.weights = Some(FeatureWeights::new(weights.clone())?);
        }
        if let Some(normalize) = self.normalize {
            model.normalize = normalize;
        }

        model.validate()?;
        Ok(model)
    }

    /// The feature set every command signs texts with: the explicit list
    /// when one is configured, otherwise the variant's.
    pub fn feature_set(&self) -> FeatureSet {
        self.features
            .clone()
            .unwrap_or_else(|| self.variant.feature_set())
    }

    /// Check that the known-author directory exists.
    pub fn require_known_dir(&self) -> Result<()> {
        if !self.known_dir.is_dir() {
            anyhow::bail!(
                "Known-author directory {} not found.\n\
                 Set AUTHORSHIP_KNOWN_DIR or pass --known-dir.",
                self.known_dir.display()
            );
        }
        Ok(())
    }
}

/// Parse a comma-separated list of weights.
pub fn parse_weights(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("\"{s}\" is not a number"))
        })
        .collect()
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected true or false, got \"{other}\""),
    }
}
