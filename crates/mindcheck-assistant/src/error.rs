use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("text generation service unavailable: {0}")]
    Unavailable(String),

    #[error("text generation request failed: {0}")]
    Request(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("prompt rendering failed: {0}")]
    TemplateRender(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for AssistantError {
    fn from(e: tera::Error) -> Self {
        AssistantError::TemplateRender(e.to_string())
    }
}

impl From<ureq::Error> for AssistantError {
    fn from(e: ureq::Error) -> Self {
        AssistantError::Request(e.to_string())
    }
}
