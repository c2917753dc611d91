//! Suicide-risk classification shared by every intake path.
//!
//! Both the comprehensive evaluation (three ideation flags) and the Suicide
//! Risk Screen (count of yes answers) resolve through [`safety_override`],
//! so the two paths cannot drift apart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcheck_core::models::evaluation::SuicidalIdeation;
use mindcheck_core::models::severity::{Route, Severity};

/// Risk-factor count at or above which risk is critical.
pub const CRITICAL_RISK_FACTORS: u32 = 6;
pub const HIGH_RISK_FACTORS: u32 = 4;
pub const MODERATE_RISK_FACTORS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_risk_factors(count: u32) -> Self {
        match count {
            c if c >= CRITICAL_RISK_FACTORS => RiskLevel::Critical,
            c if c >= HIGH_RISK_FACTORS => RiskLevel::High,
            c if c >= MODERATE_RISK_FACTORS => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    /// Plan or intent is critical; thoughts alone are high.
    pub fn from_ideation(ideation: &SuicidalIdeation) -> Self {
        if ideation.plan || ideation.intent {
            RiskLevel::Critical
        } else if ideation.thoughts {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Navigation decision. `Emergency` exists only to choose whether to show
/// emergency resources; it is stored as `human_therapy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CarePath {
    Stable,
    AiSupport,
    HumanTherapy,
    Emergency,
}

impl CarePath {
    /// The route persisted on the assessment record.
    pub fn route(self) -> Route {
        match self {
            CarePath::Stable => Route::Stable,
            CarePath::AiSupport => Route::AiSupport,
            CarePath::HumanTherapy | CarePath::Emergency => Route::HumanTherapy,
        }
    }

    pub fn is_emergency(self) -> bool {
        self == CarePath::Emergency
    }
}

/// A risk signal in either of its two input shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskSignal {
    Ideation(SuicidalIdeation),
    RiskFactors(u32),
}

impl RiskSignal {
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            RiskSignal::Ideation(ideation) => RiskLevel::from_ideation(ideation),
            RiskSignal::RiskFactors(count) => RiskLevel::from_risk_factors(*count),
        }
    }
}

/// Severity and care path imposed by a risk signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyDecision {
    pub risk_level: RiskLevel,
    pub severity: Severity,
    pub path: CarePath,
}

/// Decide whether a risk signal overrides score-based classification.
///
/// Any raised ideation flag yields `severe` on the emergency path. A
/// risk-factor count of 2 or more yields a professional referral, tiered
/// by count. `None` means the signal imposes nothing.
pub fn safety_override(signal: RiskSignal) -> Option<SafetyDecision> {
    let risk_level = signal.risk_level();
    match signal {
        RiskSignal::Ideation(ideation) if ideation.any() => Some(SafetyDecision {
            risk_level,
            severity: Severity::Severe,
            path: CarePath::Emergency,
        }),
        RiskSignal::Ideation(_) => None,
        RiskSignal::RiskFactors(_) => {
            let (severity, path) = match risk_level {
                RiskLevel::Critical => (Severity::Severe, CarePath::Emergency),
                RiskLevel::High => (Severity::ModeratelySevere, CarePath::HumanTherapy),
                RiskLevel::Moderate => (Severity::Moderate, CarePath::HumanTherapy),
                RiskLevel::Low => return None,
            };
            Some(SafetyDecision {
                risk_level,
                severity,
                path,
            })
        }
    }
}
