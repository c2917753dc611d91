//! The comprehensive symptom evaluation as collected by the intake forms.
//!
//! Every field is optional on the wire. Numeric sub-scores sit on a 0–10
//! scale; absent values are resolved to 0 by the triage engine's
//! normalization step, never here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SymptomEvaluation {
    pub sleep_patterns: SleepPatterns,
    pub appetite: Appetite,
    pub energy: Energy,
    pub behavior: Behavior,
    pub social: Social,
    pub thoughts: Thoughts,
    pub coping: Coping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SleepPatterns {
    pub quality: Option<u32>,
    pub duration: Option<u32>,
    pub disturbances: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Appetite {
    pub changes: Option<u32>,
    pub motivation: Option<u32>,
    pub weight_changes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Energy {
    pub level: Option<u32>,
    pub fatigue: Option<u32>,
    pub motivation: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Behavior {
    pub social_withdrawal: Option<u32>,
    pub irritability: Option<u32>,
    pub changes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Social {
    pub functioning: Option<u32>,
    pub relationships: Option<u32>,
    pub isolation: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Thoughts {
    pub self_image: Option<u32>,
    pub negative_thoughts: Vec<String>,
    pub suicidal_ideation: SuicidalIdeation,
}

/// Self-harm risk flags. Always present; each flag defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SuicidalIdeation {
    pub thoughts: bool,
    pub plan: bool,
    pub intent: bool,
}

impl SuicidalIdeation {
    /// True when any of the three flags is raised.
    pub fn any(&self) -> bool {
        self.thoughts || self.plan || self.intent
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Coping {
    pub effectiveness: Option<u32>,
    pub mechanisms: Vec<String>,
    pub support: Vec<String>,
}
