//! Hybrid reranking of retrieved candidates.
//!
//! Given a query and the candidates returned by vector similarity search,
//! [`HybridReranker`] blends three signals into one `combined_score` per
//! document:
//!
//! - **vector score** — similarity from retrieval, weight 1.0 (dominant)
//! - **lexical score** — query/abstract term overlap, see [`crate::lexical`]
//! - **metadata bonus** — recency and citation step functions
//!
//! `combined = vector + 0.2 * (lexical + bonus)`, so the non-vector signals
//! adjust by at most ~0.28 and cannot overturn a strong semantic match.
//!
//! Filters (`lexical_min`, year range, citations, publication types) exclude
//! documents outright rather than zeroing their scores. The surviving set is
//! sorted by `combined_score` descending with a strict, fully deterministic
//! tie-break (vector score, then citation count, then id) and truncated to
//! the configured limit.
//!
//! The reranker is stateless and pure: identical inputs always produce the
//! identical output sequence.

pub mod error;


pub use error::RerankError;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::constants::{
    CITATION_BONUS_HIGH, CITATION_BONUS_HIGH_MIN, CITATION_BONUS_MODERATE,
    CITATION_BONUS_MODERATE_MIN, LEXICAL_WEIGHT, RECENCY_BONUS_FAR, RECENCY_BONUS_NEAR,
    RECENCY_FAR_WINDOW, RECENCY_NEAR_WINDOW,
};
use crate::document::CandidateDocument;
use crate::lexical;

/// Stateless hybrid scorer. All per-request knobs live in [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct HybridReranker;

impl HybridReranker {
    pub fn new() -> Self {
        Self
    }

    /// Scores, filters, sorts, and truncates `candidates` for `query`.
    ///
    /// Validates `config` up front (input-contract violations fail fast) and
    /// then never errors on document content: missing abstracts, years, or
    /// citation counts degrade to the lowest-scoring bucket. A non-finite
    /// `vector_score` is rejected as malformed input since it would break the
    /// total ordering guarantee.
    ///
    /// Empty `candidates` yields an empty result. An empty or all-stop-word
    /// query yields `lexical_score` 0.0 for every candidate.
    pub fn rerank(
        &self,
        query: &str,
        candidates: Vec<CandidateDocument>,
        config: &ScoringConfig,
    ) -> Result<Vec<CandidateDocument>, RerankError> {
        config.validate()?;

        if candidates.is_empty() {
            debug!("no candidates to rerank");
            return Ok(Vec::new());
        }

        let query_terms = lexical::significant_terms(query);
        if query_terms.is_empty() {
            debug!(query_len = query.len(), "query has no significant terms");
        }

        let input_count = candidates.len();
        let mut ranked = Vec::with_capacity(candidates.len());

        for mut doc in candidates {
            if !doc.vector_score.is_finite() {
                return Err(RerankError::InvalidVectorScore {
                    id: doc.id,
                    value: doc.vector_score,
                });
            }

            let lexical_score = match doc.abstract_text.as_deref() {
                Some(text) => lexical::overlap_score(&query_terms, text),
                None => 0.0,
            };

            if let Some(reason) = exclusion_reason(&doc, lexical_score, config) {
                debug!(id = %doc.id, reason, "candidate excluded by filter");
                continue;
            }

            let bonus = metadata_bonus(&doc, config.reference_year);
            let combined = doc.vector_score + LEXICAL_WEIGHT * (lexical_score + bonus);

            doc.lexical_score = Some(lexical_score);
            doc.combined_score = Some(combined);
            ranked.push(doc);
        }

        sort_ranked(&mut ranked);
        ranked.truncate(config.limit);

        debug!(
            input_count,
            retained = ranked.len(),
            top_score = ranked.first().and_then(|d| d.combined_score),
            "reranking complete"
        );

        Ok(ranked)
    }
}

/// Recency and citation step bonuses, summed.
///
/// Buckets are anchored to `reference_year` (with the default anchor 2025 the
/// recency cutoffs are the documented 2022/2018). Missing year or citation
/// data contributes 0.0.
pub fn metadata_bonus(doc: &CandidateDocument, reference_year: i32) -> f32 {
    let mut bonus = 0.0;

    if let Some(year) = doc.publication_year {
        if year >= reference_year - RECENCY_NEAR_WINDOW {
            bonus += RECENCY_BONUS_NEAR;
        } else if year >= reference_year - RECENCY_FAR_WINDOW {
            bonus += RECENCY_BONUS_FAR;
        }
    }

    let citations = doc.citations();
    if citations >= CITATION_BONUS_HIGH_MIN {
        bonus += CITATION_BONUS_HIGH;
    } else if citations >= CITATION_BONUS_MODERATE_MIN {
        bonus += CITATION_BONUS_MODERATE;
    }

    bonus
}

/// Returns the name of the first active filter the document fails, if any.
///
/// Documents with unknown `publication_year` are excluded when a year filter
/// is active: a caller asking for "2020 onwards" should not receive undated
/// material.
fn exclusion_reason(
    doc: &CandidateDocument,
    lexical_score: f32,
    config: &ScoringConfig,
) -> Option<&'static str> {
    if lexical_score < config.lexical_min {
        return Some("lexical_min");
    }

    if let Some(year_from) = config.year_from {
        match doc.publication_year {
            Some(year) if year >= year_from => {}
            _ => return Some("year_from"),
        }
    }

    if let Some(year_to) = config.year_to {
        match doc.publication_year {
            Some(year) if year <= year_to => {}
            _ => return Some("year_to"),
        }
    }

    if let Some(min_citations) = config.min_citations
        && doc.citations() < min_citations
    {
        return Some("min_citations");
    }

    if let Some(ref allowed) = config.publication_types
        && !allowed.contains(&doc.publication_type)
    {
        return Some("publication_types");
    }

    None
}

/// Sorts by `combined_score` descending; ties by `vector_score` descending,
/// then `citation_count` descending, then `id` ascending. The id tie-break
/// makes the order a strict total order, so output is reproducible.
fn sort_ranked(ranked: &mut [CandidateDocument]) {
    ranked.sort_by(|a, b| {
        let a_combined = a.combined_score.unwrap_or(f32::NEG_INFINITY);
        let b_combined = b.combined_score.unwrap_or(f32::NEG_INFINITY);
        b_combined
            .total_cmp(&a_combined)
            .then_with(|| b.vector_score.total_cmp(&a.vector_score))
            .then_with(|| b.citations().cmp(&a.citations()))
            .then_with(|| a.id.cmp(&b.id))
    });
}
