// Min-max normalization of signatures across the known authors.
//
// Bounds are fitted once from the known-author signatures and then applied,
// unchanged, to every unknown text in the same run. They are never refitted
// on the unknown text. A dimension where every author has the same value
// (max == min) normalizes to 0.0.

use serde::Serialize;

use crate::error::FeatureError;
use crate::signature::{Signature, Signatures};

/// Per-dimension minimum and maximum over a set of signatures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounds {
    mins: Vec<f64>,
    maxs: Vec<f64>,
}

impl Bounds {
    /// Fit bounds from known signatures.
    ///
    /// An empty set yields zero-dimension bounds. Signatures of different
    /// arity are rejected.
    pub fn fit(signatures: &Signatures) -> Result<Self, FeatureError> {
        let mut iter = signatures.values();
        let Some(first) = iter.next() else {
            return Ok(Self {
                mins: Vec::new(),
                maxs: Vec::new(),
            });
        };

        let mut mins = first.values().to_vec();
        let mut maxs = first.values().to_vec();

        for sig in iter {
            FeatureError::check_dims("normalization fit", mins.len(), sig.dims())?;
            for (i, &v) in sig.values().iter().enumerate() {
                mins[i] = mins[i].min(v);
                maxs[i] = maxs[i].max(v);
            }
        }

        Ok(Self { mins, maxs })
    }

    pub fn dims(&self) -> usize {
        self.mins.len()
    }

    pub fn mins(&self) -> &[f64] {
        &self.mins
    }

    pub fn maxs(&self) -> &[f64] {
        &self.maxs
    }

    /// Rescale a signature into [0, 1] per dimension using these bounds.
    ///
    /// Values outside the fitted range map outside [0, 1]; only the known
    /// authors are guaranteed to land inside it.
    pub fn apply(&self, signature: &Signature) -> Result<Signature, FeatureError> {
        FeatureError::check_dims("normalization bounds", self.mins.len(), self.maxs.len())?;
        FeatureError::check_dims("normalization bounds", self.dims(), signature.dims())?;
        Ok(Signature::new(
            signature
                .values()
                .iter()
                .zip(self.mins.iter().zip(&self.maxs))
                .map(|(&v, (&min, &max))| {
                    if max > min {
                        (v - min) / (max - min)
                    } else {
                        0.0
                    }
                })
                .collect(),
        ))
    }
}

/// Fit bounds on the known signatures and normalize each of them.
pub fn normalize_corpus(signatures: &Signatures) -> Result<(Signatures, Bounds), FeatureError> {
    let bounds = Bounds::fit(signatures)?;
    let normalized = signatures
        .iter()
        .map(|(author, sig)| Ok((author.clone(), bounds.apply(sig)?)))
        .collect::<Result<Signatures, FeatureError>>()?;
    Ok((normalized, bounds))
}

/// Normalize one signature with previously fitted bounds.
pub fn normalize_signature(
    signature: &Signature,
    bounds: &Bounds,
) -> Result<Signature, FeatureError> {
    bounds.apply(signature)
}
