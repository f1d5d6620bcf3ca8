use super::{ConfigError, DataLoadError, NluError};

/// Umbrella error for the circuit search workspace.
#[derive(Debug, thiserror::Error)]
pub enum CircuitError {
    #[error("dataset error: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("nlu error: {0}")]
    Nlu(#[from] NluError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("session not found: {session_id}")]
    SessionNotFound { session_id: String },
}

pub type CircuitResult<T> = Result<T, CircuitError>;
