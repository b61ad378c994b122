//! End-to-end scenarios for the rerank → assess pipeline.

use evidence_engine::{
    CandidateDocument, EvidenceEngine, PublicationType, ScoringConfig,
};

fn doc(id: &str, vector_score: f32) -> CandidateDocument {
    CandidateDocument::new(id, format!("Paper {id}"), vector_score)
}

/// Three other_review documents with modest citations and no recent years:
/// base 0.5 + hierarchy 1.0 + citations 0.0 + recency 0.0 = 1.5, rounds to 2.
#[test]
fn scenario_modest_reviews_score_two() {
    let engine = EvidenceEngine::new();
    let candidates = vec![
        doc("r1", 0.82)
            .with_abstract("Vitamin C acts as an antioxidant in plasma.")
            .with_publication_type(PublicationType::OtherReview)
            .with_citations(47)
            .with_year(2016),
        doc("r2", 0.78)
            .with_abstract("Antioxidant properties of vitamin C in vitro.")
            .with_publication_type(PublicationType::OtherReview)
            .with_citations(22)
            .with_year(2012),
        doc("r3", 0.71)
            .with_abstract("Vitamin C and oxidative stress.")
            .with_publication_type(PublicationType::OtherReview)
            .with_citations(9)
            .with_year(2019),
    ];

    let evidence = engine
        .rank_and_assess("vitamin c antioxidant", candidates, &ScoringConfig::default())
        .unwrap();

    assert_eq!(evidence.total_found(), 3);
    assert!((evidence.evidence_quality.raw - 1.5).abs() < 1e-6);
    assert_eq!(evidence.evidence_quality.score, 2);
}

/// Two well-cited systematic reviews plus three well-cited recent RCTs:
/// base 1.0 + hierarchy 2.0 + citations 1.0 + recency 0.5 = 4.5, rounds to 5.
#[test]
fn scenario_strong_evidence_scores_five() {
    let engine = EvidenceEngine::new();
    let candidates = vec![
        doc("sr1", 0.91)
            .with_publication_type(PublicationType::SystematicReview)
            .with_citations(140)
            .with_year(2023),
        doc("sr2", 0.88)
            .with_publication_type(PublicationType::SystematicReview)
            .with_citations(110)
            .with_year(2024),
        doc("rct1", 0.85)
            .with_publication_type(PublicationType::Rct)
            .with_citations(60)
            .with_year(2023),
        doc("rct2", 0.80)
            .with_publication_type(PublicationType::Rct)
            .with_citations(55)
            .with_year(2024),
        doc("rct3", 0.77)
            .with_publication_type(PublicationType::Rct)
            .with_citations(52)
            .with_year(2022),
    ];

    let evidence = engine
        .rank_and_assess("statin therapy outcomes", candidates, &ScoringConfig::default())
        .unwrap();

    assert_eq!(evidence.total_found(), 5);
    assert!((evidence.evidence_quality.raw - 4.5).abs() < 1e-6);
    assert_eq!(evidence.evidence_quality.score, 5);
    assert_eq!(
        evidence.evidence_quality.label(),
        evidence_engine::EvidenceLabel::Strong
    );
}

/// A single old, barely-cited primary study contributes nothing: score 0.
#[test]
fn scenario_single_weak_study_scores_zero() {
    let engine = EvidenceEngine::new();
    let candidates = vec![
        doc("p1", 0.65)
            .with_publication_type(PublicationType::PrimaryStudy)
            .with_citations(5)
            .with_year(2015),
    ];

    let evidence = engine
        .rank_and_assess("obscure topic", candidates, &ScoringConfig::default())
        .unwrap();

    assert_eq!(evidence.total_found(), 1);
    assert_eq!(evidence.evidence_quality.raw, 0.0);
    assert_eq!(evidence.evidence_quality.score, 0);
}

/// Empty candidate list: empty results, quality 0.
#[test]
fn scenario_empty_input() {
    let engine = EvidenceEngine::new();
    let evidence = engine
        .rank_and_assess("anything at all", Vec::new(), &ScoringConfig::default())
        .unwrap();

    assert!(evidence.results.is_empty());
    assert_eq!(evidence.evidence_quality.score, 0);
}

#[test]
fn reranking_is_deterministic_end_to_end() {
    let engine = EvidenceEngine::new();
    let candidates: Vec<CandidateDocument> = (0..30)
        .map(|i| {
            doc(&format!("p{i:02}"), ((i * 7) % 100) as f32 / 100.0)
                .with_abstract("Magnesium supplementation and sleep quality in adults.")
                .with_year(2010 + (i % 15))
                .with_citations(((i * 37) % 200) as u32)
                .with_publication_type(match i % 4 {
                    0 => PublicationType::Rct,
                    1 => PublicationType::OtherReview,
                    2 => PublicationType::PrimaryStudy,
                    _ => PublicationType::Unknown,
                })
        })
        .collect();
    let config = ScoringConfig::default().with_limit(10).with_lexical_min(0.1);

    let first = engine
        .rank_and_assess("magnesium sleep quality", candidates.clone(), &config)
        .unwrap();
    let second = engine
        .rank_and_assess("magnesium sleep quality", candidates, &config)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn every_returned_document_satisfies_all_filters() {
    let engine = EvidenceEngine::new();
    let candidates: Vec<CandidateDocument> = (0..40)
        .map(|i| {
            let mut d = doc(&format!("p{i:02}"), ((i * 13) % 100) as f32 / 100.0)
                .with_citations(((i * 11) % 80) as u32);
            if i % 3 != 0 {
                d = d.with_year(2008 + (i % 18));
            }
            if i % 2 == 0 {
                d = d.with_abstract("Dietary fiber intake and gut microbiome diversity.");
            }
            d
        })
        .collect();

    let config = ScoringConfig::default()
        .with_lexical_min(0.3)
        .with_year_range(Some(2015), Some(2024))
        .with_min_citations(10)
        .with_limit(20);

    let evidence = engine
        .rank_and_assess("fiber gut microbiome", candidates, &config)
        .unwrap();

    for d in &evidence.results {
        assert!(d.lexical_score.unwrap() >= config.lexical_min, "doc {}", d.id);
        let year = d.publication_year.expect("year filter must exclude undated docs");
        assert!((2015..=2024).contains(&year), "doc {}", d.id);
        assert!(d.citations() >= 10, "doc {}", d.id);
    }
}

#[test]
fn output_is_sorted_with_total_order() {
    let engine = EvidenceEngine::new();
    let candidates: Vec<CandidateDocument> = (0..25)
        .map(|i| {
            doc(&format!("p{i:02}"), ((i * 3) % 10) as f32 / 10.0)
                .with_citations((i % 5) as u32 * 20)
        })
        .collect();
    let config = ScoringConfig::default().with_limit(25);

    let evidence = engine.rank_and_assess("query", candidates, &config).unwrap();

    for pair in evidence.results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (ca, cb) = (a.combined_score.unwrap(), b.combined_score.unwrap());
        assert!(ca >= cb);
        if ca == cb {
            assert!(a.vector_score >= b.vector_score);
            if a.vector_score == b.vector_score {
                assert!(a.citations() >= b.citations());
                if a.citations() == b.citations() {
                    assert!(a.id < b.id);
                }
            }
        }
    }
}

#[test]
fn response_layer_sees_populated_scores_and_quality() {
    let engine = EvidenceEngine::new();
    let candidates = vec![
        doc("p1", 0.9)
            .with_abstract("Intermittent fasting and metabolic markers.")
            .with_publication_type(PublicationType::MetaAnalysis)
            .with_citations(220)
            .with_year(2024),
    ];

    let evidence = engine
        .rank_and_assess("intermittent fasting metabolic", candidates, &ScoringConfig::default())
        .unwrap();
    let json = serde_json::to_value(&evidence).unwrap();

    let result = &json["results"][0];
    assert!(result["vector_score"].as_f64().unwrap() > 0.0);
    assert!(result["lexical_score"].as_f64().unwrap() > 0.0);
    assert!(result["combined_score"].as_f64().unwrap() > 0.0);
    assert_eq!(result["publication_type"], "meta_analysis");
    assert!(json["evidence_quality"]["score"].as_u64().unwrap() <= 5);
}
