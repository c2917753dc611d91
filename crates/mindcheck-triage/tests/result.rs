use mindcheck_core::models::assessment::AssessmentKind;
use mindcheck_core::models::evaluation::{SuicidalIdeation, SymptomEvaluation};
use mindcheck_core::models::severity::{Route, Severity};
use mindcheck_triage::aggregate::{
    MAX_COMPOSITE_SCORE, calculate_symptom_score, generate_symptoms, label,
};
use mindcheck_triage::recommend::generate_recommendations;
use mindcheck_triage::result::create_assessment_result;

/// Every numeric field explicitly set to `value`.
fn uniform(value: u32) -> SymptomEvaluation {
    let json = serde_json::json!({
        "sleepPatterns": { "quality": value, "duration": value },
        "appetite": { "changes": value, "motivation": value },
        "energy": { "level": value, "fatigue": value, "motivation": value },
        "behavior": { "socialWithdrawal": value, "irritability": value },
        "social": { "functioning": value, "relationships": value, "isolation": value },
        "thoughts": { "selfImage": value },
        "coping": { "effectiveness": value }
    });
    serde_json::from_value(json).unwrap()
}

#[test]
fn all_zero_evaluation_is_minimal_and_stable() {
    let result = create_assessment_result(&uniform(0), None, None);
    assert_eq!(calculate_symptom_score(&uniform(0)), 0);
    assert_eq!(result.severity, Severity::Minimal);
    assert_eq!(result.route_to, Route::Stable);
    assert!(result.symptoms.is_empty());
    assert_eq!(result.kind, AssessmentKind::Comprehensive);
}

#[test]
fn ideation_plan_overrides_a_zero_score() {
    let mut evaluation = uniform(0);
    evaluation.thoughts.suicidal_ideation = SuicidalIdeation {
        plan: true,
        ..Default::default()
    };
    let result = create_assessment_result(&evaluation, None, None);
    assert_eq!(result.severity, Severity::Severe);
    assert_eq!(result.route_to, Route::HumanTherapy);
    assert!(
        result
            .recommendations
            .contains(&"Create a safety plan".to_string())
    );
}

#[test]
fn sleep_quality_alone_triggers_sleep_disturbances() {
    let mut evaluation = uniform(0);
    evaluation.sleep_patterns.quality = Some(6);
    let symptoms = generate_symptoms(&evaluation);
    assert!(symptoms.contains(&label::SLEEP_DISTURBANCES.to_string()));
    assert!(!symptoms.contains(&label::INSOMNIA_OR_OVERSLEEPING.to_string()));

    let result = create_assessment_result(&evaluation, None, None);
    assert!(
        result
            .recommendations
            .contains(&"Practice sleep hygiene".to_string())
    );
}

#[test]
fn composite_sums_all_fourteen_fields() {
    assert_eq!(calculate_symptom_score(&uniform(1)), 14);
    assert_eq!(calculate_symptom_score(&uniform(10)), MAX_COMPOSITE_SCORE);
    assert_eq!(calculate_symptom_score(&SymptomEvaluation::default()), 0);
}

#[test]
fn missing_fields_default_to_zero() {
    let evaluation: SymptomEvaluation =
        serde_json::from_str(r#"{ "energy": { "fatigue": 7 } }"#).unwrap();
    assert_eq!(calculate_symptom_score(&evaluation), 7);
    assert_eq!(generate_symptoms(&evaluation), vec![label::FATIGUE.to_string()]);
}

#[test]
fn symptoms_follow_domain_order() {
    let symptoms = generate_symptoms(&uniform(5));
    let expected = [
        label::SLEEP_DISTURBANCES,
        label::INSOMNIA_OR_OVERSLEEPING,
        label::APPETITE_CHANGES,
        label::LOSS_OF_MOTIVATION,
        label::LOW_ENERGY,
        label::FATIGUE,
        label::LACK_OF_MOTIVATION,
        label::SOCIAL_DIFFICULTIES,
        label::SOCIAL_WITHDRAWAL,
        label::RELATIONSHIP_PROBLEMS,
        label::SOCIAL_WITHDRAWAL,
        label::IRRITABILITY,
        label::NEGATIVE_SELF_IMAGE,
        label::POOR_COPING_SKILLS,
    ];
    assert_eq!(symptoms, expected.map(String::from).to_vec());
}

/// Current behavior: the label is emitted for both trigger fields.
#[test]
fn social_withdrawal_label_is_not_deduplicated() {
    let evaluation: SymptomEvaluation = serde_json::from_str(
        r#"{ "social": { "isolation": 8 }, "behavior": { "socialWithdrawal": 8 } }"#,
    )
    .unwrap();
    let symptoms = generate_symptoms(&evaluation);
    let count = symptoms
        .iter()
        .filter(|s| *s == label::SOCIAL_WITHDRAWAL)
        .count();
    assert_eq!(count, 2);

    let recs = generate_recommendations(Severity::Minimal, &symptoms);
    let advice = recs
        .iter()
        .filter(|r| *r == "Gradually increase social activities")
        .count();
    assert_eq!(advice, 1);
}

#[test]
fn coping_effectiveness_is_protective() {
    let mut evaluation = uniform(0);
    evaluation.coping.effectiveness = Some(5);
    assert!(generate_symptoms(&evaluation).contains(&label::POOR_COPING_SKILLS.to_string()));

    evaluation.coping.effectiveness = Some(1);
    assert!(generate_symptoms(&evaluation).contains(&label::POOR_COPING_SKILLS.to_string()));

    evaluation.coping.effectiveness = Some(6);
    assert!(!generate_symptoms(&evaluation).contains(&label::POOR_COPING_SKILLS.to_string()));
}

#[test]
fn threshold_is_inclusive_at_five() {
    let mut evaluation = uniform(0);
    evaluation.energy.level = Some(4);
    assert!(generate_symptoms(&evaluation).is_empty());
    evaluation.energy.level = Some(5);
    assert_eq!(generate_symptoms(&evaluation), vec![label::LOW_ENERGY.to_string()]);
}

#[test]
fn recommendations_are_universal_then_tier_then_symptoms() {
    let symptoms = vec![
        label::LOW_ENERGY.to_string(),
        label::SLEEP_DISTURBANCES.to_string(),
    ];
    let recs = generate_recommendations(Severity::Moderate, &symptoms);
    assert_eq!(
        recs,
        vec![
            "Practice regular self-care",
            "Maintain a consistent sleep schedule",
            "Engage in physical activity",
            "Schedule professional evaluation",
            "Consider therapy options",
            "Build support network",
            "Practice sleep hygiene",
            "Start with small, manageable tasks",
        ]
    );

    let minimal = generate_recommendations(Severity::Minimal, &[]);
    assert_eq!(minimal.len(), 5);
    assert_eq!(minimal[4], "Regular mood monitoring");
}

#[test]
fn severe_and_moderately_severe_share_a_tier() {
    let severe = generate_recommendations(Severity::Severe, &[]);
    let mod_severe = generate_recommendations(Severity::ModeratelySevere, &[]);
    assert_eq!(severe, mod_severe);
    assert_eq!(severe[3], "Seek immediate professional help");
}

#[test]
fn sub_scores_and_questionnaire_totals() {
    let evaluation: SymptomEvaluation = serde_json::from_str(
        r#"{
            "sleepPatterns": { "quality": 3, "duration": 4 },
            "appetite": { "changes": 1, "motivation": 2 },
            "energy": { "level": 1, "fatigue": 1, "motivation": 1 },
            "social": { "functioning": 2, "relationships": 2, "isolation": 2 },
            "coping": { "effectiveness": 7 }
        }"#,
    )
    .unwrap();
    let result = create_assessment_result(&evaluation, Some(12), None);

    assert_eq!(result.scores.sleep, Some(7));
    assert_eq!(result.scores.appetite, Some(3));
    assert_eq!(result.scores.energy, Some(3));
    assert_eq!(result.scores.social, Some(6));
    assert_eq!(result.scores.coping, Some(7));
    assert_eq!(result.scores.phq9, Some(12));
    assert_eq!(result.scores.gad7, None);
    assert_eq!(result.scores.suicide_risk, None);
}

#[test]
fn questionnaire_totals_do_not_change_classification() {
    let evaluation = uniform(1);
    let plain = create_assessment_result(&evaluation, None, None);
    let with_totals = create_assessment_result(&evaluation, Some(27), Some(21));
    assert_eq!(plain.severity, with_totals.severity);
    assert_eq!(plain.route_to, with_totals.route_to);
}

#[test]
fn repeated_builds_are_identical_apart_from_identity() {
    let mut evaluation = uniform(6);
    evaluation.coping.effectiveness = Some(3);
    let first = create_assessment_result(&evaluation, Some(9), Some(4));
    let second = create_assessment_result(&evaluation, Some(9), Some(4));

    assert_ne!(first.id, second.id);
    assert_eq!(first.severity, second.severity);
    assert_eq!(first.symptoms, second.symptoms);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(first.route_to, second.route_to);
    assert_eq!(first.scores, second.scores);
}

#[test]
fn high_composite_score_refers_to_a_professional() {
    let result = create_assessment_result(&uniform(8), None, None);
    assert_eq!(result.severity, Severity::Severe);
    assert_eq!(result.route_to, Route::HumanTherapy);

    let result = create_assessment_result(&uniform(3), None, None);
    assert_eq!(result.severity, Severity::Mild);
    assert_eq!(result.route_to, Route::AiSupport);
}

#[test]
fn huge_field_values_saturate_instead_of_wrapping() {
    let json = serde_json::json!({
        "sleepPatterns": { "quality": u32::MAX, "duration": 1 },
        "energy": { "level": u32::MAX, "fatigue": u32::MAX, "motivation": 1 }
    });
    let evaluation: SymptomEvaluation = serde_json::from_value(json).unwrap();

    assert_eq!(calculate_symptom_score(&evaluation), u32::MAX);
    let result = create_assessment_result(&evaluation, None, None);
    assert_eq!(result.severity, Severity::Severe);
    assert_eq!(result.route_to, Route::HumanTherapy);
    assert_eq!(result.scores.sleep, Some(u32::MAX));
    assert_eq!(result.scores.energy, Some(u32::MAX));
}
