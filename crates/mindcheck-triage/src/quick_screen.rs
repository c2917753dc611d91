//! Results for the PHQ-9 / GAD-7 quick screens.
//!
//! A quick screen carries no domain detail, so domain sub-scores come from a
//! synthesized baseline evaluation and severity comes from the
//! questionnaire's own cutoffs.

use tracing::debug;
use uuid::Uuid;

use mindcheck_core::models::assessment::{AssessmentKind, AssessmentResult};
use mindcheck_core::models::evaluation::{
    Appetite, Behavior, Coping, Energy, SleepPatterns, Social, SymptomEvaluation, Thoughts,
};
use mindcheck_core::models::severity::{Route, Severity};
use mindcheck_instruments::Questionnaire;

use crate::aggregate::domain_scores;
use crate::normalize::NormalizedEvaluation;

const BASELINE_VALUE: u32 = 2;

/// Every numeric field at the baseline value, no ideation flags.
pub fn baseline_evaluation() -> SymptomEvaluation {
    let v = Some(BASELINE_VALUE);
    SymptomEvaluation {
        sleep_patterns: SleepPatterns {
            quality: v,
            duration: v,
            ..Default::default()
        },
        appetite: Appetite {
            changes: v,
            motivation: v,
            ..Default::default()
        },
        energy: Energy {
            level: v,
            fatigue: v,
            motivation: v,
        },
        behavior: Behavior {
            social_withdrawal: v,
            irritability: v,
            ..Default::default()
        },
        social: Social {
            functioning: v,
            relationships: v,
            isolation: v,
        },
        thoughts: Thoughts {
            self_image: v,
            ..Default::default()
        },
        coping: Coping {
            effectiveness: v,
            ..Default::default()
        },
    }
}

/// Quick-screen routing. Moderate screens go to AI support here, unlike the
/// comprehensive path, which refers them to a professional.
pub fn quick_screen_route(severity: Severity) -> Route {
    match severity {
        Severity::Severe | Severity::ModeratelySevere => Route::HumanTherapy,
        Severity::Moderate | Severity::Mild => Route::AiSupport,
        Severity::Minimal => Route::Stable,
    }
}

/// Score a questionnaire and build its assessment record.
pub fn quick_screen_result(
    questionnaire: &dyn Questionnaire,
    answers: &[Option<u8>],
) -> AssessmentResult {
    let score = questionnaire.score(answers);
    let severity = score.severity;
    let kind = questionnaire.kind();

    let mut scores = domain_scores(&NormalizedEvaluation::from(&baseline_evaluation()));
    match kind {
        AssessmentKind::Phq9 => scores.phq9 = Some(score.total),
        AssessmentKind::Gad7 => scores.gad7 = Some(score.total),
        AssessmentKind::Comprehensive | AssessmentKind::SuicideRisk => {}
    }

    let (symptoms, recommendations) = if severity == Severity::Minimal {
        (
            Vec::new(),
            vec![
                "Continue healthy habits".to_string(),
                "Regular mood monitoring".to_string(),
            ],
        )
    } else {
        (
            vec!["Mood changes".to_string(), "Anxiety symptoms".to_string()],
            vec![
                "Consider professional evaluation".to_string(),
                "Practice self-care strategies".to_string(),
            ],
        )
    };

    let route_to = quick_screen_route(severity);
    let id = Uuid::new_v4();
    debug!(
        assessment_id = %id,
        questionnaire = questionnaire.id(),
        total = score.total,
        severity = %severity,
        route = %route_to,
        "quick screen scored"
    );

    AssessmentResult {
        id,
        kind,
        timestamp: jiff::Timestamp::now(),
        scores,
        severity,
        symptoms,
        recommendations,
        route_to,
    }
}
