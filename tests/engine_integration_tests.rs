//! Engine Integration Tests
//!
//! End-to-end checks from assessment through score, plan and rendered
//! explanation, using the worked examples from the clinical reference.

use airway_scorer_rust::{
    ExplanationGenerator, JsonFormatter, MallampatiClass, MarkdownFormatter, PatientAssessment,
    PreviousDifficulty, RecommendationMapper, RiskEngine, RiskTier,
};

#[test]
fn test_obese_mallampati_iv_previous_difficulty() {
    let assessment = PatientAssessment {
        weight: 100.0,
        height: 160.0,
        mallampati: MallampatiClass::IV,
        tmd: 5.0,
        previous_difficulty: PreviousDifficulty::Both,
        ..Default::default()
    };

    let (result, plan) = RiskEngine::compute_with_plan(&assessment);

    assert_eq!(result.score, 91);
    assert_eq!(result.contributors.len(), 4);
    assert_eq!(result.tier(), RiskTier::High);
    assert!(plan.high_risk_warning);

    let points: Vec<u32> = result.contributors.iter().map(|c| c.contribution).collect();
    assert_eq!(points, vec![18, 22, 16, 35]);
}

#[test]
fn test_blank_assessment_end_to_end() {
    let result = RiskEngine::compute(&PatientAssessment::default());
    let plan = RecommendationMapper::map_plan(result.score);

    assert_eq!(result.score, 0);
    assert!(result.contributors.is_empty());
    assert_eq!(plan.tier, RiskTier::Low);
    assert!(!plan.high_risk_warning);
    assert_eq!(
        plan.equipment,
        vec![
            "Standard laryngoscope with appropriate blades",
            "Endotracheal tubes (multiple sizes)",
            "Stylet",
            "Suction available",
        ]
    );
}

#[test]
fn test_mallampati_ii_and_age_keep_insertion_order() {
    let assessment = PatientAssessment {
        mallampati: MallampatiClass::II,
        age: 60,
        ..Default::default()
    };

    let result = RiskEngine::compute(&assessment);

    assert_eq!(result.score, 11);
    assert_eq!(result.tier(), RiskTier::Low);
    assert_eq!(result.contributors.len(), 2);
    assert_eq!(result.contributors[0].factor, "Mallampati Class 2");
    assert_eq!(result.contributors[0].contribution, 5);
    assert_eq!(result.contributors[1].factor, "Age >55 years");
    assert_eq!(result.contributors[1].contribution, 6);
}

#[test]
fn test_tier_boundaries() {
    let cases = [
        (29, RiskTier::Low, false),
        (30, RiskTier::Moderate, false),
        (59, RiskTier::Moderate, false),
        (60, RiskTier::High, true),
    ];
    for (score, tier, warning) in cases {
        let plan = RecommendationMapper::map_plan(score);
        assert_eq!(plan.tier, tier, "score {}", score);
        assert_eq!(plan.high_risk_warning, warning, "score {}", score);
    }
}

#[test]
fn test_form_payload_to_markdown() {
    let payload = r#"{
        "age": 0, "gender": "", "weight": 0, "height": 0,
        "mallampati": "3", "tmd": 6.2, "interIncisor": 0,
        "neckMobility": "reduced", "jawProtrusion": "", "ulbt": "",
        "osa": "suspected", "arthritis": "", "radiationHistory": "",
        "previousDifficulty": ""
    }"#;
    let assessment: PatientAssessment = serde_json::from_str(payload).unwrap();
    let result = RiskEngine::compute(&assessment);

    // 15 + 8 + 12 + 8
    assert_eq!(result.score, 43);

    let explanation = ExplanationGenerator::generate(&result);
    assert_eq!(explanation.level.tier, RiskTier::Moderate);

    let md = MarkdownFormatter::format(&explanation);
    assert!(md.contains("Enhanced Preparation - Video Laryngoscopy First"));
    assert!(md.contains("| Mallampati Class 3 | +15 | 35% |"));

    let json = JsonFormatter::format_compact(&explanation).unwrap();
    assert!(json.contains("\"label\":\"Moderate\""));
}
