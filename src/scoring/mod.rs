// Scoring: normalization, distance, and nearest-author classification.

pub mod classify;
pub mod distance;
pub mod model;
pub mod normalize;

pub use classify::{classify, guess_author, rank, Guess};
pub use distance::{weighted_euclidean, FeatureWeights};
pub use model::{AuthorModel, ModelConfig};
pub use normalize::{normalize_corpus, normalize_signature, Bounds};
