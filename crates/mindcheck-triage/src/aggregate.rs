//! Composite scoring and symptom derivation for the comprehensive
//! evaluation.

use mindcheck_core::models::assessment::AssessmentScores;
use mindcheck_core::models::evaluation::SymptomEvaluation;

use crate::normalize::NormalizedEvaluation;

/// Canonical symptom labels.
pub mod label {
    pub const SLEEP_DISTURBANCES: &str = "Sleep disturbances";
    pub const INSOMNIA_OR_OVERSLEEPING: &str = "Insomnia or oversleeping";
    pub const APPETITE_CHANGES: &str = "Appetite changes";
    pub const LOSS_OF_MOTIVATION: &str = "Loss of motivation";
    pub const LOW_ENERGY: &str = "Low energy";
    pub const FATIGUE: &str = "Fatigue";
    pub const LACK_OF_MOTIVATION: &str = "Lack of motivation";
    pub const SOCIAL_DIFFICULTIES: &str = "Social difficulties";
    pub const SOCIAL_WITHDRAWAL: &str = "Social withdrawal";
    pub const RELATIONSHIP_PROBLEMS: &str = "Relationship problems";
    pub const IRRITABILITY: &str = "Irritability";
    pub const NEGATIVE_SELF_IMAGE: &str = "Negative self-image";
    pub const POOR_COPING_SKILLS: &str = "Poor coping skills";
}

/// Risk-indicating fields add a symptom at or above this value.
pub const SYMPTOM_THRESHOLD: u32 = 5;

/// A rated coping effectiveness adds a symptom at or below this value.
pub const COPING_THRESHOLD: u32 = 5;

/// Highest composite score reachable with every field at 10.
pub const MAX_COMPOSITE_SCORE: u32 = 140;

/// Unweighted sum of the fourteen composite fields.
pub fn calculate_symptom_score(evaluation: &SymptomEvaluation) -> u32 {
    composite_score(&NormalizedEvaluation::from(evaluation))
}

/// Out-of-range inputs saturate at `u32::MAX` instead of wrapping.
pub fn composite_score(normalized: &NormalizedEvaluation) -> u32 {
    saturating_sum(&normalized.composite_fields())
}

fn saturating_sum(values: &[u32]) -> u32 {
    values.iter().fold(0u32, |acc, v| acc.saturating_add(*v))
}

/// Symptom labels in fixed domain order: sleep, appetite, energy, social,
/// behavior, thoughts, coping.
///
/// "Social withdrawal" is emitted once for `social.isolation` and again for
/// `behavior.socialWithdrawal`. Recommendations key off label membership,
/// so the duplicate is left in place.
pub fn generate_symptoms(evaluation: &SymptomEvaluation) -> Vec<String> {
    symptoms(&NormalizedEvaluation::from(evaluation))
}

pub fn symptoms(n: &NormalizedEvaluation) -> Vec<String> {
    let risk_checks = [
        (n.sleep_quality, label::SLEEP_DISTURBANCES),
        (n.sleep_duration, label::INSOMNIA_OR_OVERSLEEPING),
        (n.appetite_changes, label::APPETITE_CHANGES),
        (n.appetite_motivation, label::LOSS_OF_MOTIVATION),
        (n.energy_level, label::LOW_ENERGY),
        (n.energy_fatigue, label::FATIGUE),
        (n.energy_motivation, label::LACK_OF_MOTIVATION),
        (n.social_functioning, label::SOCIAL_DIFFICULTIES),
        (n.social_isolation, label::SOCIAL_WITHDRAWAL),
        (n.social_relationships, label::RELATIONSHIP_PROBLEMS),
        (n.behavior_social_withdrawal, label::SOCIAL_WITHDRAWAL),
        (n.behavior_irritability, label::IRRITABILITY),
        (n.thoughts_self_image, label::NEGATIVE_SELF_IMAGE),
    ];

    let mut out: Vec<String> = risk_checks
        .iter()
        .filter(|(value, _)| *value >= SYMPTOM_THRESHOLD)
        .map(|(_, name)| name.to_string())
        .collect();

    // Protective field: low effectiveness is the symptom. 0 is the unrated
    // default and does not count as a rating.
    if (1..=COPING_THRESHOLD).contains(&n.coping_effectiveness) {
        out.push(label::POOR_COPING_SKILLS.to_string());
    }

    out
}

/// Per-domain sub-scores for the result's `scores` mapping.
pub fn domain_scores(n: &NormalizedEvaluation) -> AssessmentScores {
    AssessmentScores {
        sleep: Some(saturating_sum(&[n.sleep_quality, n.sleep_duration])),
        appetite: Some(saturating_sum(&[n.appetite_changes, n.appetite_motivation])),
        energy: Some(saturating_sum(&[
            n.energy_level,
            n.energy_fatigue,
            n.energy_motivation,
        ])),
        social: Some(saturating_sum(&[
            n.social_functioning,
            n.social_relationships,
            n.social_isolation,
        ])),
        coping: Some(n.coping_effectiveness),
        ..Default::default()
    }
}
