//! Cross-cutting scoring constants.
//!
//! Prefer deriving secondary thresholds (e.g. recency cutoffs) from primary
//! ones to avoid drift. The recency cutoffs are anchored to
//! [`DEFAULT_REFERENCE_YEAR`] rather than the process clock so scoring stays
//! reproducible across time; callers that want wall-clock behavior opt in via
//! [`ScoringConfig::with_current_year`](crate::config::ScoringConfig::with_current_year).

/// Weight applied to the lexical + metadata adjustment on top of the vector score.
///
/// `combined = vector + LEXICAL_WEIGHT * (lexical + metadata_bonus)`, which
/// keeps vector similarity dominant: the adjustment contributes at most
/// `LEXICAL_WEIGHT * (1.0 + RECENCY_BONUS_NEAR + CITATION_BONUS_HIGH)` ≈ 0.28.
pub const LEXICAL_WEIGHT: f32 = 0.2;

/// Bonus for documents published within [`RECENCY_NEAR_WINDOW`] years of the reference year.
pub const RECENCY_BONUS_NEAR: f32 = 0.2;
/// Bonus for documents published within [`RECENCY_FAR_WINDOW`] years of the reference year.
pub const RECENCY_BONUS_FAR: f32 = 0.1;

/// Years back from the reference year for the near-recency bucket.
/// With the default reference year 2025 this yields the documented `>= 2022` cutoff.
pub const RECENCY_NEAR_WINDOW: i32 = 3;
/// Years back from the reference year for the far-recency bucket (documented `>= 2018`).
pub const RECENCY_FAR_WINDOW: i32 = 7;

/// Citation count at which the high citation bonus applies.
pub const CITATION_BONUS_HIGH_MIN: u32 = 50;
/// Citation count at which the moderate citation bonus applies.
pub const CITATION_BONUS_MODERATE_MIN: u32 = 10;

pub const CITATION_BONUS_HIGH: f32 = 0.2;
pub const CITATION_BONUS_MODERATE: f32 = 0.1;

/// Epoch anchor for recency buckets when the caller does not inject a year.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// Default maximum number of documents returned by the reranker.
pub const DEFAULT_LIMIT: usize = 5;

/// Default minimum lexical score; 0.0 disables lexical filtering.
pub const DEFAULT_LEXICAL_MIN: f32 = 0.0;

/// Citation count treated as "high impact" by the evidence assessor.
pub const ASSESS_HIGH_CITATIONS: u32 = 100;
/// Lower bound of the "moderate impact" citation band (upper bound is
/// [`ASSESS_HIGH_CITATIONS`], exclusive).
pub const ASSESS_MODERATE_CITATIONS: u32 = 50;

/// Years back from the reference year inside which a document counts as
/// recent for the assessor's recency weight.
pub const ASSESS_RECENT_WINDOW: i32 = 3;

/// Upper bound of the evidence quality scale.
pub const MAX_QUALITY_SCORE: u8 = 5;
