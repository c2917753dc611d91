use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use mindcheck_core::models::severity::Severity;

use crate::error::InstrumentError;

/// Valid range for a single item answer, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Every Likert item is scored 0–3.
pub const ITEM_RANGE: ScoreRange = ScoreRange { min: 0, max: 3 };

/// Severity assigned to totals at or below `max_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub max_total: u32,
    pub severity: Severity,
}

/// Outcome of scoring a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireScore {
    pub total: u32,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    /// 1-based item number; `None` for whole-sheet problems.
    pub item: Option<usize>,
    pub value: Option<u8>,
    pub expected_range: ScoreRange,
    pub message: String,
}

/// Frequency wording shown next to each answer value.
pub fn answer_label(value: u8) -> &'static str {
    match value {
        0 => "Not at all",
        1 => "Several days",
        2 => "More than half the days",
        3 => "Nearly every day",
        _ => "out of range",
    }
}

/// Parse a single answer token: `0`–`3`, or `-` for unanswered.
pub fn parse_answer(token: &str) -> Result<Option<u8>, InstrumentError> {
    let token = token.trim();
    if token == "-" {
        return Ok(None);
    }
    token
        .parse::<u8>()
        .ok()
        .filter(|v| ITEM_RANGE.contains(*v))
        .map(Some)
        .ok_or_else(|| InstrumentError::InvalidAnswer(token.to_string()))
}

/// Parse a yes/no token (`y`, `yes`, `true`, `1` / `n`, `no`, `false`, `0`).
pub fn parse_yes_no(token: &str) -> Result<bool, InstrumentError> {
    match token.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(InstrumentError::InvalidYesNo(token.to_string())),
    }
}
