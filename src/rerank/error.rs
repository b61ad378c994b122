use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by [`HybridReranker::rerank`](super::HybridReranker::rerank).
///
/// Both variants are input-contract violations; document content (missing
/// metadata, empty abstracts) never errors.
#[derive(Debug, Error)]
pub enum RerankError {
    #[error("invalid scoring configuration: {0}")]
    Config(#[from] ConfigError),

    /// A candidate arrived with a NaN or infinite vector score, which would
    /// break the total ordering of results.
    #[error("invalid vector score for candidate {id}: {value}")]
    InvalidVectorScore { id: String, value: f32 },
}
