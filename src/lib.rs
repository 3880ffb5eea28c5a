// Authorship: stylometric attribution of unsigned texts.
//
// This is the library root. Text flows leaf-to-root through the modules:
// text (tokenize and clean) -> signature (feature vectors) -> scoring
// (normalize, distance, nearest author). corpus and config feed the
// pipeline from disk and environment; output renders results.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod scoring;
pub mod signature;
pub mod text;

pub use error::FeatureError;
pub use scoring::{guess_author, normalize_corpus, AuthorModel, Guess, ModelConfig};
pub use signature::{build_signatures, Signature, Signatures};
