use mindcheck_core::models::assessment::AssessmentKind;
use mindcheck_core::models::severity::{Route, Severity};
use mindcheck_instruments::instruments::gad7::Gad7;
use mindcheck_instruments::instruments::phq9::Phq9;
use mindcheck_triage::aggregate::calculate_symptom_score;
use mindcheck_triage::quick_screen::{baseline_evaluation, quick_screen_result, quick_screen_route};
use mindcheck_triage::safety::RiskLevel;
use mindcheck_triage::suicide_risk::suicide_risk_result;

fn yes_answers(count: usize) -> Vec<bool> {
    (0..10).map(|i| i < count).collect()
}

#[test]
fn max_phq9_quick_screen_is_severe_human_therapy() {
    let result = quick_screen_result(&Phq9, &[Some(3); 9]);
    assert_eq!(result.kind, AssessmentKind::Phq9);
    assert_eq!(result.scores.phq9, Some(27));
    assert_eq!(result.scores.gad7, None);
    assert_eq!(result.severity, Severity::Severe);
    assert_eq!(result.route_to, Route::HumanTherapy);
    assert_eq!(result.symptoms, vec!["Mood changes", "Anxiety symptoms"]);
}

#[test]
fn minimal_quick_screen_is_stable_with_no_symptoms() {
    let result = quick_screen_result(&Gad7, &[Some(0); 7]);
    assert_eq!(result.kind, AssessmentKind::Gad7);
    assert_eq!(result.scores.gad7, Some(0));
    assert_eq!(result.severity, Severity::Minimal);
    assert_eq!(result.route_to, Route::Stable);
    assert!(result.symptoms.is_empty());
    assert_eq!(
        result.recommendations,
        vec!["Continue healthy habits", "Regular mood monitoring"]
    );
}

#[test]
fn moderate_quick_screen_goes_to_ai_support() {
    // 3+3+3+2 = 11
    let answers = [Some(3), Some(3), Some(3), Some(2), None, None, None];
    let result = quick_screen_result(&Gad7, &answers);
    assert_eq!(result.severity, Severity::Moderate);
    assert_eq!(result.route_to, Route::AiSupport);
    assert_eq!(quick_screen_route(Severity::Mild), Route::AiSupport);
    assert_eq!(quick_screen_route(Severity::ModeratelySevere), Route::HumanTherapy);
}

#[test]
fn quick_screen_sub_scores_come_from_baseline() {
    assert_eq!(calculate_symptom_score(&baseline_evaluation()), 28);
    let result = quick_screen_result(&Phq9, &[Some(1); 9]);
    assert_eq!(result.scores.sleep, Some(4));
    assert_eq!(result.scores.energy, Some(6));
    assert_eq!(result.scores.coping, Some(2));
}

#[test]
fn six_risk_factors_is_critical_and_emergency() {
    let outcome = suicide_risk_result(&yes_answers(6));
    assert_eq!(outcome.decision.risk_level, RiskLevel::Critical);
    assert!(outcome.is_emergency());
    assert_eq!(outcome.result.severity, Severity::Severe);
    assert_eq!(outcome.result.route_to, Route::HumanTherapy);
    assert_eq!(outcome.result.scores.suicide_risk, Some(6));
    assert_eq!(outcome.result.recommendations[0], "Call 988 immediately");
}

#[test]
fn risk_screen_tiers() {
    let high = suicide_risk_result(&yes_answers(4));
    assert_eq!(high.decision.risk_level, RiskLevel::High);
    assert_eq!(high.result.severity, Severity::ModeratelySevere);
    assert_eq!(high.result.route_to, Route::HumanTherapy);
    assert!(!high.is_emergency());

    let moderate = suicide_risk_result(&yes_answers(2));
    assert_eq!(moderate.result.severity, Severity::Moderate);
    assert_eq!(moderate.result.route_to, Route::HumanTherapy);

    let low = suicide_risk_result(&yes_answers(1));
    assert_eq!(low.decision.risk_level, RiskLevel::Low);
    assert_eq!(low.result.severity, Severity::Mild);
    assert_eq!(low.result.route_to, Route::AiSupport);
    assert_eq!(
        low.result.symptoms,
        vec!["Suicidal ideation", "Risk factors present"]
    );
}

#[test]
fn no_risk_factors_has_no_symptoms() {
    let outcome = suicide_risk_result(&[false; 10]);
    assert!(outcome.result.symptoms.is_empty());
    assert_eq!(outcome.result.severity, Severity::Mild);
    assert_eq!(outcome.result.kind, AssessmentKind::SuicideRisk);
    assert_eq!(outcome.result.recommendations[0], "Continue monitoring");
}
