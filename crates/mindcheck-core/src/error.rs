use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid severity: {0}")]
    InvalidSeverity(String),

    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("invalid assessment kind: {0}")]
    InvalidKind(String),
}
