//! Assembles the engine stages into an [`AssessmentResult`].

use tracing::{debug, warn};
use uuid::Uuid;

use mindcheck_core::models::assessment::{AssessmentKind, AssessmentResult};
use mindcheck_core::models::evaluation::SymptomEvaluation;

use crate::aggregate::{composite_score, domain_scores, symptoms};
use crate::classify::{determine_routing, determine_severity};
use crate::normalize::NormalizedEvaluation;
use crate::recommend::generate_recommendations;

/// Score, classify, and route a comprehensive evaluation.
///
/// Optional PHQ-9 / GAD-7 totals are recorded in `scores` but do not affect
/// severity or routing. Never fails; absent fields count as 0 / false.
pub fn create_assessment_result(
    evaluation: &SymptomEvaluation,
    phq9_score: Option<u32>,
    gad7_score: Option<u32>,
) -> AssessmentResult {
    let normalized = NormalizedEvaluation::from(evaluation);
    let ideation = normalized.suicidal_ideation;

    let total_score = composite_score(&normalized);
    let severity = determine_severity(total_score, &ideation);
    let route_to = determine_routing(severity, &ideation);
    let symptoms = symptoms(&normalized);
    let recommendations = generate_recommendations(severity, &symptoms);

    let mut scores = domain_scores(&normalized);
    scores.phq9 = phq9_score;
    scores.gad7 = gad7_score;

    let id = Uuid::new_v4();
    if ideation.any() {
        warn!(assessment_id = %id, "suicidal ideation reported, forcing severe / human_therapy");
    }
    debug!(
        assessment_id = %id,
        total_score,
        severity = %severity,
        route = %route_to,
        symptom_count = symptoms.len(),
        "assessment created"
    );

    AssessmentResult {
        id,
        kind: AssessmentKind::Comprehensive,
        timestamp: jiff::Timestamp::now(),
        scores,
        severity,
        symptoms,
        recommendations,
        route_to,
    }
}
