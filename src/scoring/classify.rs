// Nearest-signature classifier.
//
// The unknown signature is compared with every known author; the author at
// the strictly smallest distance wins. Known signatures iterate in
// lexicographic author order and only a strict improvement replaces the
// current best, so ties go to the alphabetically first author.

use serde::Serialize;
use tracing::debug;

use super::distance::{weighted_euclidean, FeatureWeights};
use super::normalize::Bounds;
use crate::error::FeatureError;
use crate::signature::{signature_of_text, FeatureSet, Signature, Signatures};

/// An author together with its distance from the unknown text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guess {
    pub author: String,
    pub distance: f64,
}

/// Pick the closest known author, or `None` when there are no authors.
pub fn classify(
    unknown: &Signature,
    known: &Signatures,
    weights: Option<&FeatureWeights>,
) -> Result<Option<Guess>, FeatureError> {
    let mut best: Option<Guess> = None;

    for (author, sig) in known {
        let distance = weighted_euclidean(unknown, sig, weights)?;
        debug!(author = author.as_str(), distance, "Candidate distance");

        let improves = best.as_ref().map_or(true, |b| distance < b.distance);
        if improves {
            best = Some(Guess {
                author: author.clone(),
                distance,
            });
        }
    }

    Ok(best)
}

/// Every known author with its distance, closest first.
///
/// Equal distances keep lexicographic author order.
pub fn rank(
    unknown: &Signature,
    known: &Signatures,
    weights: Option<&FeatureWeights>,
) -> Result<Vec<Guess>, FeatureError> {
    let mut ranking = known
        .iter()
        .map(|(author, sig)| {
            Ok(Guess {
                author: author.clone(),
                distance: weighted_euclidean(unknown, sig, weights)?,
            })
        })
        .collect::<Result<Vec<_>, FeatureError>>()?;
    ranking.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(ranking)
}

/// Sign an unknown text and classify it against known signatures.
///
/// When `bounds` is given, the unknown signature is normalized with those
/// bounds before comparison; `signatures` must then already be the
/// normalized known signatures fitted with the same bounds.
pub fn guess_author(
    unknown_text: &str,
    signatures: &Signatures,
    features: &FeatureSet,
    bounds: Option<&Bounds>,
    weights: Option<&FeatureWeights>,
) -> Result<Option<Guess>, FeatureError> {
    if signatures.is_empty() {
        return Ok(None);
    }

    let raw = signature_of_text(unknown_text, features);
    let unknown = match bounds {
        Some(b) => b.apply(&raw)?,
        None => raw,
    };

    classify(&unknown, signatures, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(entries: Vec<(&str, Vec<f64>)>) -> Signatures {
        entries
            .into_iter()
            .map(|(a, v)| (a.to_string(), Signature::new(v)))
            .collect()
    }

    #[test]
    fn test_classify_picks_nearest() {
        let k = known(vec![("far", vec![10.0, 10.0]), ("near", vec![1.0, 1.0])]);
        let guess = classify(&Signature::new(vec![0.0, 0.0]), &k, None)
            .unwrap()
            .unwrap();
        assert_eq!(guess.author, "near");
        assert!((guess.distance - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_classify_tie_goes_to_first_author() {
        let k = known(vec![("zed", vec![1.0]), ("amy", vec![-1.0])]);
        let guess = classify(&Signature::new(vec![0.0]), &k, None)
            .unwrap()
            .unwrap();
        assert_eq!(guess.author, "amy");
    }

    #[test]
    fn test_classify_empty_known_is_none() {
        let guess = classify(&Signature::zeros(3), &Signatures::new(), None).unwrap();
        assert!(guess.is_none());
    }

    #[test]
    fn test_classify_mismatched_arity_fails() {
        let k = known(vec![("a", vec![0.0, 0.0, 0.0])]);
        assert!(classify(&Signature::zeros(6), &k, None).is_err());
    }

    #[test]
    fn test_weights_change_the_winner() {
        // "x" is close on dim 0, "y" is close on dim 1
        let k = known(vec![("x", vec![0.1, 1.0]), ("y", vec![1.0, 0.1])]);
        let unknown = Signature::new(vec![0.0, 0.0]);

        let favour_dim0 = FeatureWeights::new(vec![10.0, 1.0]).unwrap();
        let favour_dim1 = FeatureWeights::new(vec![1.0, 10.0]).unwrap();

        let a = classify(&unknown, &k, Some(&favour_dim0)).unwrap().unwrap();
        let b = classify(&unknown, &k, Some(&favour_dim1)).unwrap().unwrap();
        assert_eq!(a.author, "x");
        assert_eq!(b.author, "y");
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let k = known(vec![("a", vec![3.0]), ("b", vec![1.0]), ("c", vec![2.0]), ("d", vec![-1.0])]);
        let ranking = rank(&Signature::new(vec![0.0]), &k, None).unwrap();
        let order: Vec<&str> = ranking.iter().map(|g| g.author.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_guess_author_empty_known_is_none() {
        let guess = guess_author("test text", &Signatures::new(), &FeatureSet::baseline(), None, None)
            .unwrap();
        assert!(guess.is_none());
    }
}
