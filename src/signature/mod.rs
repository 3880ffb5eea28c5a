// Signatures: numeric summaries of a text's writing style.

pub mod builder;
pub mod features;
pub mod vector;

pub use builder::{build_signature, build_signatures, signature_of_text, Signatures};
pub use features::{Feature, FeatureSet, Variant};
pub use vector::Signature;
