//! Hybrid reranking and evidence-quality assessment engine.
//!
//! Takes the candidate documents returned by vector similarity search and
//! (a) recomputes a combined relevance score blending vector similarity,
//! lexical overlap, and metadata signals, and (b) derives a 0–5 evidence
//! quality rating for the result set as a whole. Retrieval, embedding, and
//! the HTTP surface are the caller's collaborators; this crate is pure,
//! synchronous, and stateless — every call is a function of its arguments.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`CandidateDocument`], [`PublicationType`] - Document model
//! - [`ScoringConfig`], [`ConfigError`] - Per-request options and validation
//! - [`EvidenceQualityResult`], [`EvidenceLabel`] - Assessment output
//!
//! ## Scoring
//! - [`HybridReranker`] - Lexical/vector/metadata blending, filtering, ordering
//! - [`EvidenceAssessor`] - Aggregate 0–5 evidence quality
//! - [`EvidenceEngine`], [`RankedEvidence`] - Rerank-then-assess facade
//!
//! ## Constants
//! Scoring weights and bucket thresholds are exported from [`constants`];
//! derived thresholds are computed from the primary ones.
//!
//! # Concurrency
//!
//! No shared mutable state exists anywhere in the crate: any number of calls
//! may run in parallel without coordination, and nothing blocks, suspends, or
//! touches the network. Bounding candidate-list size (and thus call latency)
//! is the caller's concern.

pub mod config;
pub mod constants;
pub mod document;
pub mod engine;
pub mod lexical;
pub mod quality;
pub mod rerank;

pub use config::{ConfigError, ScoringConfig};
pub use constants::{
    DEFAULT_LEXICAL_MIN, DEFAULT_LIMIT, DEFAULT_REFERENCE_YEAR, LEXICAL_WEIGHT, MAX_QUALITY_SCORE,
};
pub use document::{CandidateDocument, PublicationType};
pub use engine::{EvidenceEngine, RankedEvidence};
pub use lexical::{compute_lexical_score, significant_terms};
pub use quality::{EvidenceAssessor, EvidenceLabel, EvidenceQualityResult};
pub use rerank::{HybridReranker, RerankError, metadata_bonus};
