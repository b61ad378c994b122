//! Evidence quality assessment.
//!
//! [`EvidenceAssessor`] takes the reranker's final, filtered, truncated
//! result set (what the caller will actually see) and condenses it into a
//! single 0–5 integer summarizing collective evidentiary strength. It never
//! re-scores individual documents; it only aggregates publication types,
//! citation counts, recency, and result volume.
//!
//! The evidence-hierarchy rule — "only the highest-ranked study category
//! present counts" — is encoded as an ordered tier table
//! ([`HIERARCHY_TIERS`]) scanned top to bottom, so the precedence is explicit
//! and testable rather than buried in a branch chain.


use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::constants::{
    ASSESS_HIGH_CITATIONS, ASSESS_MODERATE_CITATIONS, ASSESS_RECENT_WINDOW, MAX_QUALITY_SCORE,
};
use crate::document::{CandidateDocument, PublicationType};

/// One row of the evidence hierarchy: if at least `multi_count` documents of
/// `publication_type` are present the tier contributes `multi_weight`,
/// otherwise any single occurrence contributes `single_weight`.
struct HierarchyTier {
    publication_type: PublicationType,
    multi_count: usize,
    multi_weight: f32,
    single_weight: f32,
}

/// Precedence order, strongest first. Only the first tier with a non-zero
/// count contributes; a set holding both meta-analyses and RCTs is scored by
/// its meta-analysis tier alone.
const HIERARCHY_TIERS: [HierarchyTier; 4] = [
    HierarchyTier {
        publication_type: PublicationType::MetaAnalysis,
        multi_count: 2,
        multi_weight: 2.5,
        single_weight: 2.0,
    },
    HierarchyTier {
        publication_type: PublicationType::SystematicReview,
        multi_count: 2,
        multi_weight: 2.0,
        single_weight: 1.5,
    },
    HierarchyTier {
        publication_type: PublicationType::Rct,
        multi_count: 3,
        multi_weight: 1.5,
        single_weight: 1.0,
    },
    HierarchyTier {
        publication_type: PublicationType::OtherReview,
        multi_count: 2,
        multi_weight: 1.0,
        single_weight: 0.5,
    },
];

/// Categorical rendering of the quality score used by one response variant.
///
/// The integer is the source of truth; this label is a pure function of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceLabel {
    Strong,
    Limited,
}

/// Output of the assessor: the clamped integer score plus the raw weighted
/// subtotal before rounding, kept for observability and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvidenceQualityResult {
    /// Quality score in `[0, 5]`.
    pub score: u8,
    /// Weighted subtotal before round-half-up and clamping.
    pub raw: f32,
}

impl EvidenceQualityResult {
    /// The empty-input result: score 0 without evaluating any rule.
    pub fn empty() -> Self {
        Self { score: 0, raw: 0.0 }
    }

    /// Pure label mapping: score ≥ 4 is `strong`, anything else `limited`.
    pub fn label(&self) -> EvidenceLabel {
        if self.score >= 4 {
            EvidenceLabel::Strong
        } else {
            EvidenceLabel::Limited
        }
    }
}

/// Per-set tallies feeding the weighted aggregate.
#[derive(Debug, Default)]
struct EvidenceTally {
    type_counts: [usize; 4],
    high_citation: usize,
    moderate_citation: usize,
    recent: usize,
}

/// Stateless aggregate scorer over a reranked result set.
#[derive(Debug, Clone, Default)]
pub struct EvidenceAssessor;

impl EvidenceAssessor {
    pub fn new() -> Self {
        Self
    }

    /// Scores the collective evidence strength of `results` on the 0–5 scale.
    ///
    /// Components: result-volume base, highest-precedence hierarchy tier,
    /// citation impact, recency. The sum is rounded half-up and clamped to
    /// `[0, 5]`. Empty input short-circuits to 0. Total over any well-typed
    /// input: missing fields fall into the lowest bucket.
    pub fn assess(
        &self,
        results: &[CandidateDocument],
        config: &ScoringConfig,
    ) -> EvidenceQualityResult {
        if results.is_empty() {
            return EvidenceQualityResult::empty();
        }

        let tally = tally(results, config.reference_year);

        let mut raw = volume_base(results.len());
        raw += hierarchy_weight(&tally);
        raw += citation_weight(&tally);
        raw += recency_weight(&tally);

        let score = round_half_up(raw).clamp(0, MAX_QUALITY_SCORE);

        debug!(
            result_count = results.len(),
            raw, score, "evidence quality assessed"
        );

        EvidenceQualityResult { score, raw }
    }
}

fn tally(results: &[CandidateDocument], reference_year: i32) -> EvidenceTally {
    let mut tally = EvidenceTally::default();
    let recent_cutoff = reference_year - ASSESS_RECENT_WINDOW;

    for doc in results {
        if let Some(slot) = HIERARCHY_TIERS
            .iter()
            .position(|t| t.publication_type == doc.publication_type)
        {
            tally.type_counts[slot] += 1;
        }

        let citations = doc.citations();
        if citations >= ASSESS_HIGH_CITATIONS {
            tally.high_citation += 1;
        } else if citations >= ASSESS_MODERATE_CITATIONS {
            tally.moderate_citation += 1;
        }

        if doc.publication_year.is_some_and(|y| y >= recent_cutoff) {
            tally.recent += 1;
        }
    }

    tally
}

/// `+1.0` for five or more results, `+0.5` for three or four.
fn volume_base(count: usize) -> f32 {
    if count >= 5 {
        1.0
    } else if count >= 3 {
        0.5
    } else {
        0.0
    }
}

/// Weight of the single highest-precedence tier present.
fn hierarchy_weight(tally: &EvidenceTally) -> f32 {
    for (tier, &count) in HIERARCHY_TIERS.iter().zip(tally.type_counts.iter()) {
        if count == 0 {
            continue;
        }
        return if count >= tier.multi_count {
            tier.multi_weight
        } else {
            tier.single_weight
        };
    }
    0.0
}

/// `+1.0` for two or more high-citation documents (≥100), `+0.5` for one,
/// else `+0.5` for two or more moderate-citation documents ([50, 100)).
fn citation_weight(tally: &EvidenceTally) -> f32 {
    if tally.high_citation >= 2 {
        1.0
    } else if tally.high_citation == 1 {
        0.5
    } else if tally.moderate_citation >= 2 {
        0.5
    } else {
        0.0
    }
}

/// `+0.5` when at least two documents fall inside the recency window.
fn recency_weight(tally: &EvidenceTally) -> f32 {
    if tally.recent >= 2 { 0.5 } else { 0.0 }
}

/// Round-half-up for the non-negative subtotals this module produces
/// (`f32::round` rounds halves away from zero).
fn round_half_up(value: f32) -> u8 {
    value.max(0.0).round() as u8
}
