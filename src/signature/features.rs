// Stylometric features: the named measurements a signature is made of.
//
// Every feature is a ratio or an average over the cleaned word list, and
// every one of them is defined as 0.0 for an empty list. New features are
// added here as a new `Feature` variant; the builder and the classifier only
// ever see the ordered `FeatureSet`.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// Words longer than this many letters count as "long".
pub const LONG_WORD_MIN_EXCLUSIVE: usize = 7;
/// Words this many letters or shorter count as "short".
pub const SHORT_WORD_MAX_INCLUSIVE: usize = 3;

/// A single named stylometric measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Mean number of letters per word
    AverageWordLength,
    /// Distinct words over total words (type-token ratio)
    DifferentToTotal,
    /// Words occurring exactly once over total words (hapax ratio)
    ExactlyOnceToTotal,
    /// Words longer than 7 letters over total words
    PropLongWords,
    /// Words of 3 letters or fewer over total words
    PropShortWords,
    /// Distinct long words over distinct words
    UniqueLongRatio,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::AverageWordLength,
        Feature::DifferentToTotal,
        Feature::ExactlyOnceToTotal,
        Feature::PropLongWords,
        Feature::PropShortWords,
        Feature::UniqueLongRatio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::AverageWordLength => "average_word_length",
            Feature::DifferentToTotal => "different_to_total",
            Feature::ExactlyOnceToTotal => "exactly_once_to_total",
            Feature::PropLongWords => "prop_long_words",
            Feature::PropShortWords => "prop_short_words",
            Feature::UniqueLongRatio => "unique_long_ratio",
        }
    }

    /// Evaluate this feature against precomputed word statistics.
    pub fn compute(&self, stats: &WordStats<'_>) -> f64 {
        match self {
            Feature::AverageWordLength => ratio(stats.total_letters, stats.total),
            Feature::DifferentToTotal => ratio(stats.counts.len(), stats.total),
            Feature::ExactlyOnceToTotal => {
                let once = stats.counts.values().filter(|&&c| c == 1).count();
                ratio(once, stats.total)
            }
            Feature::PropLongWords => {
                let long = stats
                    .counts
                    .iter()
                    .filter(|(w, _)| is_long(w))
                    .map(|(_, c)| c)
                    .sum::<usize>();
                ratio(long, stats.total)
            }
            Feature::PropShortWords => {
                let short = stats
                    .counts
                    .iter()
                    .filter(|(w, _)| w.len() <= SHORT_WORD_MAX_INCLUSIVE)
                    .map(|(_, c)| c)
                    .sum::<usize>();
                ratio(short, stats.total)
            }
            Feature::UniqueLongRatio => {
                let unique_long = stats.counts.keys().filter(|w| is_long(w)).count();
                ratio(unique_long, stats.counts.len())
            }
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| FeatureError::UnknownFeature(s.to_string()))
    }
}

fn is_long(word: &str) -> bool {
    word.len() > LONG_WORD_MIN_EXCLUSIVE
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Word counts shared by all features, computed once per text.
#[derive(Debug, Clone, Default)]
pub struct WordStats<'a> {
    /// Number of words, counting repeats
    pub total: usize,
    /// Sum of the letter counts of all words
    pub total_letters: usize,
    /// Frequency of each distinct word
    pub counts: HashMap<&'a str, usize>,
}

impl<'a> WordStats<'a> {
    pub fn from_words<S: AsRef<str>>(words: &'a [S]) -> Self {
        let mut stats = WordStats::default();
        for word in words {
            let word = word.as_ref();
            stats.total += 1;
            stats.total_letters += word.chars().count();
            *stats.counts.entry(word).or_insert(0) += 1;
        }
        stats
    }
}

/// Mean word length in letters; 0.0 for no words.
pub fn average_word_length<S: AsRef<str>>(words: &[S]) -> f64 {
    Feature::AverageWordLength.compute(&WordStats::from_words(words))
}

/// Distinct words over total words; 0.0 for no words.
pub fn different_to_total<S: AsRef<str>>(words: &[S]) -> f64 {
    Feature::DifferentToTotal.compute(&WordStats::from_words(words))
}

/// Words that occur exactly once over total words; 0.0 for no words.
pub fn exactly_once_to_total<S: AsRef<str>>(words: &[S]) -> f64 {
    Feature::ExactlyOnceToTotal.compute(&WordStats::from_words(words))
}

/// The standard signature shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Word length, type-token ratio, hapax ratio
    Baseline,
    /// Baseline plus long/short word proportions and unique-long ratio
    #[default]
    Extended,
}

impl Variant {
    pub fn feature_set(&self) -> FeatureSet {
        match self {
            Variant::Baseline => FeatureSet::baseline(),
            Variant::Extended => FeatureSet::extended(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Baseline => "baseline",
            Variant::Extended => "extended",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" | "v1" => Ok(Variant::Baseline),
            "extended" | "v2" => Ok(Variant::Extended),
            other => Err(FeatureError::UnknownVariant(other.to_string())),
        }
    }
}

/// An ordered list of distinct features; its order is the signature's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    /// Build a custom feature set. Must be non-empty with no repeats.
    pub fn new(features: Vec<Feature>) -> Result<Self, FeatureError> {
        if features.is_empty() {
            return Err(FeatureError::EmptyFeatureSet);
        }
        let mut seen = HashSet::new();
        for feature in &features {
            if !seen.insert(*feature) {
                return Err(FeatureError::DuplicateFeature(*feature));
            }
        }
        Ok(Self { features })
    }

    pub fn baseline() -> Self {
        Self {
            features: Feature::ALL[..3].to_vec(),
        }
    }

    pub fn extended() -> Self {
        Self {
            features: Feature::ALL.to_vec(),
        }
    }

    /// Parse a comma-separated list of feature names.
    pub fn parse_list(list: &str) -> Result<Self, FeatureError> {
        let features = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(Feature::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(features)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Variant::default().feature_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_on_repeated_words() {
        let words = ["a", "b", "c", "a"];
        assert!((different_to_total(&words) - 0.75).abs() < 1e-12);
        assert!((exactly_once_to_total(&words) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_average_word_length() {
        assert!((average_word_length(&["hello", "world"]) - 5.0).abs() < 1e-12);
        assert!((average_word_length(&["longword", "s"]) - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_words_are_zero() {
        let empty: [&str; 0] = [];
        let stats = WordStats::from_words(&empty);
        for feature in Feature::ALL {
            assert_eq!(feature.compute(&stats), 0.0, "{feature} should be 0.0");
        }
    }

    #[test]
    fn test_long_and_short_proportions() {
        // "elephants" and "butterfly" are long (9 letters), "a" and "cat" short
        let words = ["a", "cat", "elephants", "butterfly", "elephants", "house"];
        let stats = WordStats::from_words(&words);
        assert!((Feature::PropLongWords.compute(&stats) - 3.0 / 6.0).abs() < 1e-12);
        assert!((Feature::PropShortWords.compute(&stats) - 2.0 / 6.0).abs() < 1e-12);
        // 2 distinct long words out of 5 distinct words
        assert!((Feature::UniqueLongRatio.compute(&stats) - 2.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_eight_letters_is_long_seven_is_not() {
        let stats = WordStats::from_words(&["absolute", "because"]);
        assert!((Feature::PropLongWords.compute(&stats) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_feature_set_rejects_duplicates_and_empty() {
        assert_eq!(FeatureSet::new(vec![]), Err(FeatureError::EmptyFeatureSet));
        assert_eq!(
            FeatureSet::new(vec![Feature::PropLongWords, Feature::PropLongWords]),
            Err(FeatureError::DuplicateFeature(Feature::PropLongWords))
        );
    }

    #[test]
    fn test_parse_list() {
        let set = FeatureSet::parse_list("average_word_length, unique_long_ratio").unwrap();
        assert_eq!(
            set.features(),
            &[Feature::AverageWordLength, Feature::UniqueLongRatio]
        );
        assert!(matches!(
            FeatureSet::parse_list("average_word_length,bogus"),
            Err(FeatureError::UnknownFeature(_))
        ));
    }

    #[test]
    fn test_variant_shapes() {
        assert_eq!(Variant::Baseline.feature_set().len(), 3);
        assert_eq!(Variant::Extended.feature_set().len(), 6);
        assert_eq!("Baseline".parse::<Variant>().unwrap(), Variant::Baseline);
        assert!("v3".parse::<Variant>().is_err());
    }
}
