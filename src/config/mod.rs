//! Scoring configuration.
//!
//! [`ScoringConfig`] maps 1:1 onto the public search request fields
//! (`lexical_min`, `year_from`, `year_to`, `min_citations`,
//! `publication_types`, `limit`) plus the injected recency reference year.
//! Defaults come from [`Default`]; deployment-level overrides for the scalar
//! defaults are read from `EVIDENCE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEXICAL_MIN, DEFAULT_LIMIT, DEFAULT_REFERENCE_YEAR};
use crate::document::PublicationType;

/// Per-request scoring and filtering options.
///
/// Validation is the caller's fail-fast gate: a config that fails
/// [`validate`](ScoringConfig::validate) is an input-contract violation and
/// must be rejected before any scoring happens. Missing document data, by
/// contrast, is never an error (it degrades to the lowest-weight bucket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Minimum lexical score to retain a document. Default `0.0` (no filtering).
    #[serde(default = "default_lexical_min")]
    pub lexical_min: f32,

    /// Minimum publication year. When set, documents with unknown year are excluded.
    #[serde(default)]
    pub year_from: Option<i32>,

    /// Maximum publication year. Same unknown-year policy as `year_from`.
    #[serde(default)]
    pub year_to: Option<i32>,

    /// Minimum citation count to retain a document.
    #[serde(default)]
    pub min_citations: Option<u32>,

    /// Allow-list of publication types. When set, anything outside the list is excluded.
    #[serde(default)]
    pub publication_types: Option<Vec<PublicationType>>,

    /// Maximum number of documents returned after ranking. Default `5`.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Epoch anchor for every recency bucket. Default `2025`, keeping scores
    /// reproducible across time; use [`with_current_year`](Self::with_current_year)
    /// for wall-clock behavior.
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
}

fn default_lexical_min() -> f32 {
    DEFAULT_LEXICAL_MIN
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_reference_year() -> i32 {
    DEFAULT_REFERENCE_YEAR
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            lexical_min: DEFAULT_LEXICAL_MIN,
            year_from: None,
            year_to: None,
            min_citations: None,
            publication_types: None,
            limit: DEFAULT_LIMIT,
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

impl ScoringConfig {
    const ENV_LEXICAL_MIN: &'static str = "EVIDENCE_LEXICAL_MIN";
    const ENV_LIMIT: &'static str = "EVIDENCE_LIMIT";
    const ENV_REFERENCE_YEAR: &'static str = "EVIDENCE_REFERENCE_YEAR";

    /// Loads the scalar defaults with `EVIDENCE_*` environment overrides.
    ///
    /// Per-request filters (`year_from`, `min_citations`, ...) have no
    /// deployment-level default and stay unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let lexical_min = Self::parse_f32_from_env(Self::ENV_LEXICAL_MIN, defaults.lexical_min)?;
        let limit = Self::parse_usize_from_env(Self::ENV_LIMIT, defaults.limit)?;
        let reference_year =
            Self::parse_i32_from_env(Self::ENV_REFERENCE_YEAR, defaults.reference_year)?;

        let config = Self {
            lexical_min,
            limit,
            reference_year,
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    /// Wall-clock wrapper: sets `reference_year` from the system UTC date.
    ///
    /// Recency buckets then drift with real time; everything else stays
    /// deterministic. The engine itself never reads the clock.
    pub fn with_current_year(mut self) -> Self {
        use chrono::Datelike;
        self.reference_year = chrono::Utc::now().year();
        self
    }

    pub fn with_lexical_min(mut self, lexical_min: f32) -> Self {
        self.lexical_min = lexical_min;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_year_range(mut self, year_from: Option<i32>, year_to: Option<i32>) -> Self {
        self.year_from = year_from;
        self.year_to = year_to;
        self
    }

    pub fn with_min_citations(mut self, min_citations: u32) -> Self {
        self.min_citations = Some(min_citations);
        self
    }

    pub fn with_publication_types(mut self, types: Vec<PublicationType>) -> Self {
        self.publication_types = Some(types);
        self
    }

    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }

    /// Validates basic invariants. Call before scoring; failure means the
    /// request must be rejected, never coerced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.lexical_min.is_finite() || !(0.0..=1.0).contains(&self.lexical_min) {
            return Err(ConfigError::InvalidLexicalMin {
                value: self.lexical_min,
            });
        }

        if self.limit == 0 {
            return Err(ConfigError::InvalidLimit { value: self.limit });
        }

        if let (Some(from), Some(to)) = (self.year_from, self.year_to)
            && from > to
        {
            return Err(ConfigError::InvalidYearRange { from, to });
        }

        Ok(())
    }

    fn parse_f32_from_env(name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .parse()
                .map_err(|source| ConfigError::FloatParseError {
                    name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => value.parse().map_err(|source| ConfigError::IntParseError {
                name,
                value,
                source,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_i32_from_env(name: &'static str, default: i32) -> Result<i32, ConfigError> {
        match env::var(name) {
            Ok(value) => value.parse().map_err(|source| ConfigError::IntParseError {
                name,
                value,
                source,
            }),
            Err(_) => Ok(default),
        }
    }
}
