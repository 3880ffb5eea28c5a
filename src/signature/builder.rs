// Signature builder: runs a feature set over cleaned words.
//
// Texts go through the tokenizer first, so the builder only ever sees
// lowercase a–z words. An author with an empty (or all-punctuation) text
// still gets a signature: the zero vector.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::features::{FeatureSet, WordStats};
use super::vector::Signature;
use crate::text::tokenize;

/// Author id → signature, iterated in lexicographic author order.
pub type Signatures = BTreeMap<String, Signature>;

/// Compute the signature of an already-cleaned word list.
pub fn build_signature<S: AsRef<str>>(words: &[S], features: &FeatureSet) -> Signature {
    let stats = WordStats::from_words(words);
    Signature::new(features.iter().map(|f| f.compute(&stats)).collect())
}

/// Tokenize, clean and sign a raw text.
pub fn signature_of_text(text: &str, features: &FeatureSet) -> Signature {
    let words = tokenize::words(text);
    build_signature(&words, features)
}

/// Build signatures for every author in a raw-text corpus.
pub fn build_signatures(corpus: &BTreeMap<String, String>, features: &FeatureSet) -> Signatures {
    let signatures: Signatures = corpus
        .iter()
        .map(|(author, text)| {
            let words = tokenize::words(text);
            debug!(author = author.as_str(), words = words.len(), "Signed author text");
            (author.clone(), build_signature(&words, features))
        })
        .collect();

    info!(
        authors = signatures.len(),
        dims = features.len(),
        "Built known-author signatures"
    );

    signatures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::features::Variant;

    #[test]
    fn test_build_signature_basic() {
        let words = ["hello", "world", "hello", "python"];
        let sig = build_signature(&words, &FeatureSet::baseline());
        // (5+5+5+6)/4, 3 distinct of 4, "world" and "python" once
        assert!((sig[0] - 5.25).abs() < 1e-12);
        assert!((sig[1] - 0.75).abs() < 1e-12);
        assert!((sig[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        for variant in [Variant::Baseline, Variant::Extended] {
            let features = variant.feature_set();
            let sig = signature_of_text("  123 ... !! ", &features);
            assert_eq!(sig, Signature::zeros(features.len()));
        }
    }

    #[test]
    fn test_build_signatures_keeps_every_author() {
        let corpus = BTreeMap::from([
            ("Alice".to_string(), "Hello world hello python".to_string()),
            ("Bob".to_string(), "Python is great and python is fun".to_string()),
            ("Empty".to_string(), String::new()),
        ]);
        let sigs = build_signatures(&corpus, &FeatureSet::baseline());
        assert_eq!(sigs.len(), 3);
        assert!((sigs["Alice"][0] - 5.25).abs() < 0.01);
        // (6+2+5+3+6+2+3)/7
        assert!((sigs["Bob"][0] - 27.0 / 7.0).abs() < 0.01);
        assert_eq!(sigs["Empty"], Signature::zeros(3));
    }

    #[test]
    fn test_empty_corpus_builds_empty_map() {
        let sigs = build_signatures(&BTreeMap::new(), &FeatureSet::extended());
        assert!(sigs.is_empty());
    }
}
