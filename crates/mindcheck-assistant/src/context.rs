//! Assessment context for chat prompts.
//!
//! Condenses the current assessment into a short XML-style block and trims
//! the conversation to the messages the model actually sees.

use serde::Serialize;

use mindcheck_core::models::assessment::AssessmentResult;
use mindcheck_core::models::chat_history::ChatMessage;

/// Number of prior messages included in a chat prompt.
pub const HISTORY_WINDOW: usize = 5;

/// Build the context block describing the user's latest assessment.
///
/// Only severity and symptoms are exposed; scores and answers stay local.
pub fn build_assessment_context(assessment: &AssessmentResult) -> String {
    let symptoms = if assessment.symptoms.is_empty() {
        "none reported".to_string()
    } else {
        assessment.symptoms.join(", ")
    };

    let mut block = String::from("<assessment_context>\n");
    block.push_str(&format!(
        "The user's assessment shows {} severity.\n",
        assessment.severity.label()
    ));
    block.push_str(&format!("Symptoms: {symptoms}\n"));
    block.push_str("</assessment_context>");
    block
}

/// A message as rendered into a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryLine {
    pub role: &'static str,
    pub content: String,
}

/// The last [`HISTORY_WINDOW`] messages, oldest first.
pub fn recent_history(messages: &[ChatMessage]) -> Vec<HistoryLine> {
    let start = messages.len().saturating_sub(HISTORY_WINDOW);
    messages[start..]
        .iter()
        .map(|m| HistoryLine {
            role: m.role.as_str(),
            content: m.content.clone(),
        })
        .collect()
}
