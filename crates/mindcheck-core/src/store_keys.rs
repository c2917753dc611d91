//! Store key conventions.
//!
//! Pure string functions, no I/O. These define the canonical layout of
//! records in the local key-value store.

use crate::models::assessment::AssessmentKind;

pub const CURRENT_ASSESSMENT: &str = "current_assessment.json";

pub const ASSESSMENT_HISTORY: &str = "assessment_history.json";

pub const SYMPTOM_EVALUATION: &str = "symptom_evaluation.json";

pub const WEEKLY_CHECKINS: &str = "weekly_checkins.json";

pub const CHAT_SESSION: &str = "chat_session.json";

pub const ANSWERS_PREFIX: &str = "answers/";

pub fn answers(kind: AssessmentKind) -> String {
    format!("{ANSWERS_PREFIX}{kind}.json")
}

/// Every key the application writes. A full data reset deletes all of them.
pub fn all_keys() -> Vec<String> {
    let mut keys: Vec<String> = [
        CURRENT_ASSESSMENT,
        ASSESSMENT_HISTORY,
        SYMPTOM_EVALUATION,
        WEEKLY_CHECKINS,
        CHAT_SESSION,
    ]
    .iter()
    .map(|k| k.to_string())
    .collect();
    keys.extend(
        [
            AssessmentKind::Phq9,
            AssessmentKind::Gad7,
            AssessmentKind::SuicideRisk,
        ]
        .into_iter()
        .map(answers),
    );
    keys
}
