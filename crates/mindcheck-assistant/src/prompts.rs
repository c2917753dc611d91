//! Prompt templates (Tera / Jinja2 syntax) and their renderer.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AssistantError;

/// Asks for a JSON object shaped like [`crate::analysis::SymptomAnalysis`].
pub const SYMPTOM_ANALYSIS: &str = "\
Analyze the following mental health evaluation and provide a structured response in JSON format:

Sleep Patterns: Quality {{ sleep_quality }}/10, Duration {{ sleep_duration }}/10
Appetite Changes: {{ appetite_changes }}/10, Motivation {{ appetite_motivation }}/10
Energy Level: {{ energy_level }}/10, Fatigue {{ energy_fatigue }}/10, Motivation {{ energy_motivation }}/10
Social Functioning: {{ social_functioning }}/10, Relationships {{ social_relationships }}/10, Isolation {{ social_isolation }}/10
Behavior: Social Withdrawal {{ behavior_social_withdrawal }}/10, Irritability {{ behavior_irritability }}/10
Self-Image: {{ thoughts_self_image }}/10
Coping Effectiveness: {{ coping_effectiveness }}/10

Suicidal Ideation: Thoughts {{ ideation_thoughts }}, Plan {{ ideation_plan }}, Intent {{ ideation_intent }}

Provide a JSON response with:
{
  \"severity\": \"minimal|mild|moderate|moderately_severe|severe\",
  \"symptoms\": [\"list of identified symptoms\"],
  \"recommendations\": [\"list of recommendations\"],
  \"routeTo\": \"ai_support|human_therapy|stable\"
}

Route to human_therapy if suicidal ideation is present or severity is moderate or higher. \
Route to ai_support for mild symptoms. Route to stable for minimal symptoms.";

pub const THERAPEUTIC_RESPONSE: &str = "\
{{ context }}

Recent conversation:
{% for turn in history %}{{ turn.role }}: {{ turn.content }}
{% endfor %}
User: {{ message }}

Provide a supportive, therapeutic response that:
1. Acknowledges their feelings
2. Offers coping strategies
3. Encourages professional help if needed
4. Maintains a warm, empathetic tone";

pub const PROGRESS_ANALYSIS: &str = "\
Analyze this progress data and provide insights:

Mood History: {{ mood_history | join(sep=\", \") }}
Current Symptoms: {{ symptoms | join(sep=\", \") }}
Number of Check-ins: {{ checkin_count }}

Provide JSON response:
{
  \"insights\": [\"list of progress insights\"],
  \"recommendations\": [\"list of recommendations\"],
  \"reassessmentNeeded\": true/false
}";

/// Render a template with any serializable context.
pub fn render_prompt(
    template_name: &str,
    template_content: &str,
    context: &impl Serialize,
) -> Result<String, AssistantError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| AssistantError::TemplateRender(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Pull the outermost `{ ... }` object out of a model reply that may wrap
/// it in prose or code fences.
pub fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (start < end).then(|| &reply[start..=end])
}
