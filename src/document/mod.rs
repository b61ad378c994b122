//! Candidate document model.
//!
//! [`CandidateDocument`] is the value object flowing through the engine: it
//! arrives from the retrieval collaborator carrying a `vector_score`, the
//! reranker writes `lexical_score`/`combined_score` exactly once, and the
//! result is handed to the response-serialization layer. Documents have no
//! identity beyond `id` and never outlive the request that built them.


use serde::{Deserialize, Serialize};

/// Closed classification of a document's study design.
///
/// Drives the evidence-hierarchy weighting in the assessor. Upstream metadata
/// is free text; use [`PublicationType::from_metadata`] to map it into this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationType {
    MetaAnalysis,
    SystematicReview,
    Rct,
    OtherReview,
    PrimaryStudy,
    Unknown,
}

impl PublicationType {
    /// Infers the publication type from upstream free-text metadata.
    ///
    /// Matching is case-insensitive substring search with the same precedence
    /// the evidence hierarchy uses: meta-analysis, then systematic review,
    /// then RCT, then any other review. Non-empty text matching none of those
    /// is a primary study; empty or absent text is [`Unknown`](Self::Unknown).
    pub fn from_metadata(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return Self::Unknown;
        }
        if text.contains("meta-analysis") || text.contains("meta analysis") {
            Self::MetaAnalysis
        } else if text.contains("systematic review") {
            Self::SystematicReview
        } else if text.contains("randomized controlled trial")
            || text.contains("randomised controlled trial")
            || text.contains("rct")
        {
            Self::Rct
        } else if text.contains("review") {
            Self::OtherReview
        } else {
            Self::PrimaryStudy
        }
    }
}

impl Default for PublicationType {
    fn default() -> Self {
        Self::Unknown
    }
}

/// One retrieved candidate, before and after scoring.
///
/// `vector_score` is immutable input from retrieval. `lexical_score` and
/// `combined_score` are `None` until the reranker computes them; the reranker
/// is the only writer. `authors`, `doi`, and `url` are passthrough metadata
/// for the response layer and never affect scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: String,

    pub title: String,

    /// Abstract text; the lexical score is computed against this field.
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Missing citation data is treated as 0 everywhere it is read.
    #[serde(default)]
    pub citation_count: Option<u32>,

    #[serde(default)]
    pub publication_type: PublicationType,

    #[serde(default)]
    pub doi: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    /// Similarity from retrieval, in `[0, 1]`. Never mutated by the engine.
    pub vector_score: f32,

    /// Normalized query/abstract overlap in `[0, 1]`; written once by the reranker.
    #[serde(default)]
    pub lexical_score: Option<f32>,

    /// Final ranking score; written once by the reranker.
    #[serde(default)]
    pub combined_score: Option<f32>,
}

impl CandidateDocument {
    /// Creates a minimal candidate as the retrieval collaborator would hand it over.
    pub fn new(id: impl Into<String>, title: impl Into<String>, vector_score: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            abstract_text: None,
            authors: Vec::new(),
            publication_year: None,
            citation_count: None,
            publication_type: PublicationType::Unknown,
            doi: None,
            url: None,
            vector_score,
            lexical_score: None,
            combined_score: None,
        }
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = Some(text.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.publication_year = Some(year);
        self
    }

    pub fn with_citations(mut self, count: u32) -> Self {
        self.citation_count = Some(count);
        self
    }

    pub fn with_publication_type(mut self, publication_type: PublicationType) -> Self {
        self.publication_type = publication_type;
        self
    }

    /// Citation count with missing data resolved to the lowest bucket.
    pub fn citations(&self) -> u32 {
        self.citation_count.unwrap_or(0)
    }
}
