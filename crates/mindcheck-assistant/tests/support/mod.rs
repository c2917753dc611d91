#![allow(dead_code)]

use std::sync::Mutex;

use mindcheck_assistant::error::AssistantError;
use mindcheck_assistant::generator::TextGenerator;

/// Replies with fixed text and records every prompt it sees.
pub struct Scripted {
    reply: String,
    pub prompts: Mutex<Vec<String>>,
}

impl Scripted {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl TextGenerator for Scripted {
    fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Always fails as an unreachable server would.
pub struct Offline;

impl TextGenerator for Offline {
    fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Unavailable("connection refused".to_string()))
    }
}
