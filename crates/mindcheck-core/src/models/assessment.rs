use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::severity::{Route, Severity};
use crate::error::CoreError;

/// Which intake path produced an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentKind {
    /// Multi-domain symptom evaluation.
    Comprehensive,
    Phq9,
    Gad7,
    SuicideRisk,
}

impl AssessmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::Comprehensive => "comprehensive",
            AssessmentKind::Phq9 => "phq9",
            AssessmentKind::Gad7 => "gad7",
            AssessmentKind::SuicideRisk => "suicide_risk",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comprehensive" => Ok(AssessmentKind::Comprehensive),
            "phq9" => Ok(AssessmentKind::Phq9),
            "gad7" => Ok(AssessmentKind::Gad7),
            "suicide_risk" => Ok(AssessmentKind::SuicideRisk),
            other => Err(CoreError::InvalidKind(other.to_string())),
        }
    }
}

/// The engine's output record. Consumed by the history store, the
/// dashboard, and the chat assistant's prompt context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub kind: AssessmentKind,
    pub timestamp: jiff::Timestamp,
    pub scores: AssessmentScores,
    pub severity: Severity,
    /// Informational, not authoritative. May contain duplicates.
    pub symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    pub route_to: Route,
}

/// Named sub-scores. Present only when computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phq9: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gad7: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appetite: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coping: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suicide_risk: Option<u32>,
}
