//! Severity and routing for the comprehensive evaluation.

use mindcheck_core::models::evaluation::SuicidalIdeation;
use mindcheck_core::models::severity::{Route, Severity};

use crate::safety::{RiskSignal, safety_override};

/// Composite-score lower bounds, inclusive, highest first.
pub const COMPOSITE_BANDS: [(u32, Severity); 4] = [
    (100, Severity::Severe),
    (70, Severity::ModeratelySevere),
    (50, Severity::Moderate),
    (30, Severity::Mild),
];

/// Classify a composite score (0–140). Any ideation flag returns `severe`
/// regardless of score.
pub fn determine_severity(total_score: u32, ideation: &SuicidalIdeation) -> Severity {
    if let Some(decision) = safety_override(RiskSignal::Ideation(*ideation)) {
        return decision.severity;
    }

    COMPOSITE_BANDS
        .iter()
        .find(|(floor, _)| total_score >= *floor)
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Minimal)
}

/// Route a severity. Any ideation flag returns `human_therapy` regardless of
/// the severity passed in.
pub fn determine_routing(severity: Severity, ideation: &SuicidalIdeation) -> Route {
    if let Some(decision) = safety_override(RiskSignal::Ideation(*ideation)) {
        return decision.path.route();
    }

    severity_route(severity)
}

/// Severity-only routing used by the comprehensive path.
pub fn severity_route(severity: Severity) -> Route {
    match severity {
        Severity::Severe | Severity::ModeratelySevere | Severity::Moderate => Route::HumanTherapy,
        Severity::Mild => Route::AiSupport,
        Severity::Minimal => Route::Stable,
    }
}
