//! Lexical overlap scoring.
//!
//! Pure, deterministic functions: the score depends only on the query and the
//! abstract text, never on the clock or any external call. The score is the
//! fraction of distinct significant query terms (stop-words and punctuation
//! removed, lower-cased) that appear in the abstract, clamped to `[0, 1]`.


use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Common English function words plus generic research boilerplate that carries
/// no lexical signal in literature queries.
const STOPWORDS: &[&str] = &[
    // Function words
    "a", "an", "and", "are", "as", "at", "be", "been", "by", "for", "from", "has", "have", "in",
    "is", "it", "its", "of", "on", "or", "that", "the", "to", "was", "were", "will", "with",
    "without",
    // Generic research terms
    "study", "studies", "trial", "trials", "randomized", "randomised", "controlled", "double",
    "blind", "placebo", "effect", "effects", "treatment", "therapy", "patient", "patients",
    "women", "men", "woman", "man", "human", "humans", "subjects", "subject", "participants",
    "participant", "group", "groups", "outcome", "outcomes", "risk", "risks", "association",
    "associated", "impact", "clinical", "cohort", "review", "analysis", "analyzed", "evaluated",
    "compared", "result", "results", "data", "method", "methods", "research", "sample",
    "population", "design", "findings", "conclusion", "background", "objective", "intervention",
    "interventions", "measure", "measured", "assessment",
];

fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Lower-cases `text` and splits it on whitespace and punctuation.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || (c.is_ascii_punctuation() && c != '\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

/// Distinct significant terms of `text`: tokenized, lower-cased, stop-words removed.
///
/// `BTreeSet` keeps iteration order deterministic for logging and tests.
pub fn significant_terms(text: &str) -> BTreeSet<String> {
    let stopwords = stopword_set();
    tokenize(text)
        .filter(|t| !stopwords.contains(t.as_str()))
        .collect()
}

/// Overlap score of pre-extracted query terms against an abstract.
///
/// Returns `(terms present in abstract) / (total terms)`, clamped to `[0, 1]`.
/// An empty term set (empty or all-stop-word query) or an empty abstract
/// scores 0.0 — "no lexical signal", never an error.
pub fn overlap_score(query_terms: &BTreeSet<String>, abstract_text: &str) -> f32 {
    if query_terms.is_empty() {
        return 0.0;
    }

    let doc_terms = significant_terms(abstract_text);
    if doc_terms.is_empty() {
        return 0.0;
    }

    let overlap = query_terms.iter().filter(|t| doc_terms.contains(*t)).count();
    let coverage = overlap as f32 / query_terms.len() as f32;
    coverage.clamp(0.0, 1.0)
}

/// Convenience wrapper scoring a raw query against an optional abstract.
pub fn compute_lexical_score(query: &str, abstract_text: Option<&str>) -> f32 {
    match abstract_text {
        Some(text) => overlap_score(&significant_terms(query), text),
        None => 0.0,
    }
}
