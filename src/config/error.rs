//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating a [`ScoringConfig`](super::ScoringConfig).
///
/// Every variant is an input-contract violation: the request carrying the
/// offending value must be rejected before any scoring happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `lexical_min` must be a finite value in `[0, 1]`.
    #[error("invalid lexical_min '{value}': must be a finite value between 0.0 and 1.0")]
    InvalidLexicalMin { value: f32 },

    /// `limit` must retain at least one document.
    #[error("invalid limit '{value}': must be at least 1")]
    InvalidLimit { value: usize },

    /// `year_from` must not exceed `year_to`.
    #[error("invalid year range: year_from {from} exceeds year_to {to}")]
    InvalidYearRange { from: i32, to: i32 },

    /// An environment override could not be parsed as a float.
    #[error("failed to parse {name}='{value}': {source}")]
    FloatParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// An environment override could not be parsed as an integer.
    #[error("failed to parse {name}='{value}': {source}")]
    IntParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
