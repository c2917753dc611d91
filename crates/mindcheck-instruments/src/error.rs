use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid answer '{0}': expected 0-3 or '-' for unanswered")]
    InvalidAnswer(String),

    #[error("invalid yes/no answer '{0}'")]
    InvalidYesNo(String),
}
