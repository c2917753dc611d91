use mindcheck_core::models::severity::Severity;

use crate::aggregate::label;

const UNIVERSAL: [&str; 3] = [
    "Practice regular self-care",
    "Maintain a consistent sleep schedule",
    "Engage in physical activity",
];

/// Symptom labels that add a targeted recommendation, in check order.
const SYMPTOM_TRIGGERED: [(&str, &str); 3] = [
    (label::SLEEP_DISTURBANCES, "Practice sleep hygiene"),
    (label::SOCIAL_WITHDRAWAL, "Gradually increase social activities"),
    (label::LOW_ENERGY, "Start with small, manageable tasks"),
];

fn tier(severity: Severity) -> &'static [&'static str] {
    match severity {
        Severity::Severe | Severity::ModeratelySevere => &[
            "Seek immediate professional help",
            "Consider medication evaluation",
            "Create a safety plan",
        ],
        Severity::Moderate => &[
            "Schedule professional evaluation",
            "Consider therapy options",
            "Build support network",
        ],
        Severity::Mild => &[
            "Try self-help strategies",
            "Monitor symptoms",
            "Consider brief therapy",
        ],
        Severity::Minimal => &["Continue healthy habits", "Regular mood monitoring"],
    }
}

/// Universal advice, then the severity tier, then symptom-triggered advice.
///
/// Each triggered recommendation is added at most once, however many times
/// its label appears in `symptoms`.
pub fn generate_recommendations(severity: Severity, symptoms: &[String]) -> Vec<String> {
    let mut out: Vec<String> = UNIVERSAL.iter().map(|r| r.to_string()).collect();
    out.extend(tier(severity).iter().map(|r| r.to_string()));

    for (symptom, advice) in SYMPTOM_TRIGGERED {
        if symptoms.iter().any(|s| s == symptom) {
            out.push(advice.to_string());
        }
    }

    out
}
