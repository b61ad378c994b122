//! Engine facade: rerank then assess in one call.
//!
//! The surrounding search service hands over the raw vector-search candidates
//! and gets back everything the response layer needs: the reranked documents
//! with all three scores populated, plus the evidence-quality result computed
//! over that final, truncated set (never the pre-filter pool).


use serde::Serialize;
use tracing::debug;

use crate::config::ScoringConfig;
use crate::document::CandidateDocument;
use crate::quality::{EvidenceAssessor, EvidenceQualityResult};
use crate::rerank::{HybridReranker, RerankError};

/// Combined engine output for the response-serialization layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEvidence {
    pub results: Vec<CandidateDocument>,
    pub evidence_quality: EvidenceQualityResult,
}

impl RankedEvidence {
    pub fn total_found(&self) -> usize {
        self.results.len()
    }
}

/// Stateless, side-effect-free scoring engine.
///
/// Safe to share across threads and concurrently dispatched tasks; every call
/// operates only on its own arguments and owns no storage.
#[derive(Debug, Clone, Default)]
pub struct EvidenceEngine {
    reranker: HybridReranker,
    assessor: EvidenceAssessor,
}

impl EvidenceEngine {
    pub fn new() -> Self {
        Self {
            reranker: HybridReranker::new(),
            assessor: EvidenceAssessor::new(),
        }
    }

    /// Reranks `candidates` for `query` and assesses the evidence quality of
    /// the final result set.
    ///
    /// Config validation failures and malformed vector scores fail fast; an
    /// empty candidate list yields an empty result set with quality 0.
    pub fn rank_and_assess(
        &self,
        query: &str,
        candidates: Vec<CandidateDocument>,
        config: &ScoringConfig,
    ) -> Result<RankedEvidence, RerankError> {
        let results = self.reranker.rerank(query, candidates, config)?;
        let evidence_quality = self.assessor.assess(&results, config);

        debug!(
            total_found = results.len(),
            quality = evidence_quality.score,
            "search scoring complete"
        );

        Ok(RankedEvidence {
            results,
            evidence_quality,
        })
    }

    pub fn reranker(&self) -> &HybridReranker {
        &self.reranker
    }

    pub fn assessor(&self) -> &EvidenceAssessor {
        &self.assessor
    }
}
