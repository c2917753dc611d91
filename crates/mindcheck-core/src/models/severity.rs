use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordered risk classification, ascending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Minimal,
        Severity::Mild,
        Severity::Moderate,
        Severity::ModeratelySevere,
        Severity::Severe,
    ];

    /// Wire identifier, e.g. `moderately_severe`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minimal => "minimal",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::ModeratelySevere => "moderately_severe",
            Severity::Severe => "severe",
        }
    }

    /// Human-readable label, e.g. `moderately severe`.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::ModeratelySevere => "moderately severe",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSeverity(s.to_string()))
    }
}

/// Downstream care pathway, ordered by level of care.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Route {
    /// Self-monitoring.
    Stable,
    /// AI chat support.
    AiSupport,
    /// Professional (or emergency) referral.
    HumanTherapy,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Stable => "stable",
            Route::AiSupport => "ai_support",
            Route::HumanTherapy => "human_therapy",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Route::Stable),
            "ai_support" => Ok(Route::AiSupport),
            "human_therapy" => Ok(Route::HumanTherapy),
            other => Err(CoreError::InvalidRoute(other.to_string())),
        }
    }
}
