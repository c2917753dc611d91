//! Progress insights over weekly check-ins.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use mindcheck_core::models::checkin::WeeklyCheckin;

use crate::error::AssistantError;
use crate::generator::TextGenerator;
use crate::prompts::{PROGRESS_ANALYSIS, extract_json_object, render_prompt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressInsights {
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub reassessment_needed: bool,
}

impl ProgressInsights {
    pub fn fallback() -> Self {
        Self {
            insights: vec!["Progress monitoring is important for recovery".to_string()],
            recommendations: vec!["Continue with current treatment plan".to_string()],
            reassessment_needed: false,
        }
    }
}

#[derive(Serialize)]
struct ProgressPromptFields<'a> {
    mood_history: Vec<u8>,
    symptoms: &'a [String],
    checkin_count: usize,
}

/// Render the progress prompt. `checkins` are most-recent-first, as stored;
/// the prompt lists moods oldest first.
pub fn progress_prompt(
    checkins: &[WeeklyCheckin],
    current_symptoms: &[String],
) -> Result<String, AssistantError> {
    render_prompt(
        "progress_analysis",
        PROGRESS_ANALYSIS,
        &ProgressPromptFields {
            mood_history: checkins.iter().rev().map(|c| c.mood).collect(),
            symptoms: current_symptoms,
            checkin_count: checkins.len(),
        },
    )
}

pub fn parse_insights(reply: &str) -> Result<ProgressInsights, AssistantError> {
    let json = extract_json_object(reply)
        .ok_or_else(|| AssistantError::SchemaViolation("no JSON object in reply".to_string()))?;
    serde_json::from_str(json).map_err(|e| AssistantError::SchemaViolation(e.to_string()))
}

/// Insights from the generator, or the fixed fallback.
pub fn progress_insights(
    generator: Option<&dyn TextGenerator>,
    checkins: &[WeeklyCheckin],
    current_symptoms: &[String],
) -> ProgressInsights {
    let Some(generator) = generator else {
        return ProgressInsights::fallback();
    };

    let insights = progress_prompt(checkins, current_symptoms)
        .and_then(|prompt| generator.generate(&prompt))
        .and_then(|reply| parse_insights(&reply));

    match insights {
        Ok(insights) => {
            debug!(count = insights.insights.len(), "progress insights generated");
            insights
        }
        Err(e) => {
            warn!(error = %e, "progress insights unavailable, using fallback");
            ProgressInsights::fallback()
        }
    }
}
