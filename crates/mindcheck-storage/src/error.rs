use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid store key: {key}")]
    InvalidKey { key: String },

    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete {key}: {source}")]
    Delete {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no open chat session")]
    NoOpenSession,

    #[error("store lock poisoned")]
    Poisoned,
}
