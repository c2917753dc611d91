use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A weekly mood check-in logged between assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeeklyCheckin {
    pub id: Uuid,
    pub date: jiff::Timestamp,
    /// Overall mood for the week, 1–10.
    pub mood: u8,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub coping_strategies: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl WeeklyCheckin {
    /// Create a check-in stamped now. Mood is clamped to 1–10.
    pub fn new(
        mood: u8,
        symptoms: Vec<String>,
        coping_strategies: Vec<String>,
        notes: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: jiff::Timestamp::now(),
            mood: mood.clamp(1, 10),
            symptoms,
            coping_strategies,
            notes,
        }
    }

    pub fn mood_label(&self) -> MoodLabel {
        MoodLabel::from_mood(self.mood)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MoodLabel {
    Poor,
    Okay,
    Good,
    Excellent,
}

impl MoodLabel {
    pub fn from_mood(mood: u8) -> Self {
        match mood {
            8.. => MoodLabel::Excellent,
            6..=7 => MoodLabel::Good,
            4..=5 => MoodLabel::Okay,
            _ => MoodLabel::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Poor => "Poor",
            MoodLabel::Okay => "Okay",
            MoodLabel::Good => "Good",
            MoodLabel::Excellent => "Excellent",
        }
    }
}

/// Mean mood across check-ins, or `None` when there are none.
pub fn average_mood(checkins: &[WeeklyCheckin]) -> Option<f64> {
    if checkins.is_empty() {
        return None;
    }
    let sum: u32 = checkins.iter().map(|c| u32::from(c.mood)).sum();
    Some(f64::from(sum) / checkins.len() as f64)
}
