//! The text-generation capability and its Ollama-backed implementation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AssistantError;

/// A single `generate(prompt) -> text` capability.
///
/// Constructed by the caller and passed to whatever needs it; the scoring
/// engine never sees one.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

pub const DEFAULT_MODEL: &str = "llama3.2:1b";

const SYSTEM_FRAMING: &str = "\
You are a compassionate mental health AI assistant. Provide helpful, supportive, \
and evidence-based responses. Always prioritize safety and recommend professional \
help when appropriate.";

const CLOSING_FRAMING: &str = "\
Remember to be empathetic, non-judgmental, and supportive in your response.";

/// Wrap a task prompt in the assistant's standing instructions.
pub fn frame_prompt(prompt: &str) -> String {
    format!("{SYSTEM_FRAMING}\n\n{prompt}\n\n{CLOSING_FRAMING}")
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Text generation against a local Ollama server (`/api/generate`).
pub struct OllamaGenerator {
    base_url: String,
    model: String,
    agent: ureq::Agent,
}

impl OllamaGenerator {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            agent,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Probe `/api/tags`. Any failure means unavailable.
    pub fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.agent.get(&url).call() {
            Ok(_) => true,
            Err(e) => {
                debug!(url, error = %e, "ollama not reachable");
                false
            }
        }
    }
}

impl TextGenerator for OllamaGenerator {
    fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model,
            prompt: frame_prompt(prompt),
            stream: false,
            options: GenerateOptions {
                temperature: 0.7,
                top_p: 0.9,
                num_predict: 1000,
            },
        };

        info!(model = %self.model, prompt_len = prompt.len(), "requesting generation");

        let mut response = self.agent.post(&url).send_json(&request)?;
        let body: GenerateResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| AssistantError::SchemaViolation(e.to_string()))?;

        info!(model = %self.model, response_len = body.response.len(), "generation complete");

        Ok(body.response)
    }
}
