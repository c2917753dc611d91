//! Results for the Suicide Risk Screen.

use tracing::{debug, warn};
use uuid::Uuid;

use mindcheck_core::models::assessment::{AssessmentKind, AssessmentResult, AssessmentScores};
use mindcheck_core::models::severity::Severity;
use mindcheck_instruments::instruments::suicide_risk::count_risk_factors;

use crate::safety::{CarePath, RiskLevel, RiskSignal, SafetyDecision, safety_override};

/// A stored result plus the un-normalized care path, which tells the caller
/// whether to surface emergency resources.
#[derive(Debug, Clone)]
pub struct RiskScreenOutcome {
    pub result: AssessmentResult,
    pub decision: SafetyDecision,
}

impl RiskScreenOutcome {
    pub fn is_emergency(&self) -> bool {
        self.decision.path.is_emergency()
    }
}

/// Below every referral threshold.
const LOW_RISK: SafetyDecision = SafetyDecision {
    risk_level: RiskLevel::Low,
    severity: Severity::Mild,
    path: CarePath::AiSupport,
};

fn recommendations(level: RiskLevel) -> Vec<String> {
    let items: [&str; 3] = match level {
        RiskLevel::Critical => [
            "Call 988 immediately",
            "Go to emergency room",
            "Remove access to means",
        ],
        RiskLevel::High => [
            "Seek immediate professional help",
            "Create safety plan",
            "Remove access to means",
        ],
        RiskLevel::Moderate => [
            "Schedule professional evaluation",
            "Build support network",
            "Practice safety measures",
        ],
        RiskLevel::Low => [
            "Continue monitoring",
            "Build coping skills",
            "Maintain support connections",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// Count risk factors and build the stored result.
pub fn suicide_risk_result(answers: &[bool]) -> RiskScreenOutcome {
    let risk_factors = count_risk_factors(answers);
    let decision = safety_override(RiskSignal::RiskFactors(risk_factors)).unwrap_or(LOW_RISK);

    let symptoms = if risk_factors > 0 {
        vec![
            "Suicidal ideation".to_string(),
            "Risk factors present".to_string(),
        ]
    } else {
        Vec::new()
    };

    let id = Uuid::new_v4();
    if decision.path.is_emergency() {
        warn!(assessment_id = %id, risk_factors, "critical suicide risk, emergency path");
    }
    debug!(
        assessment_id = %id,
        risk_factors,
        risk_level = decision.risk_level.as_str(),
        severity = %decision.severity,
        "suicide risk screen scored"
    );

    let result = AssessmentResult {
        id,
        kind: AssessmentKind::SuicideRisk,
        timestamp: jiff::Timestamp::now(),
        scores: AssessmentScores {
            suicide_risk: Some(risk_factors),
            ..Default::default()
        },
        severity: decision.severity,
        symptoms,
        recommendations: recommendations(decision.risk_level),
        route_to: decision.path.route(),
    };

    RiskScreenOutcome { result, decision }
}
