//! Intake error types

use thiserror::Error;

use crate::session::Stage;

/// Result type for intake operations
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Intake error taxonomy: local validation, transitions, transport
/// failures, and backend-reported failures are kept distinct because
/// each is surfaced to the user differently.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Invalid file: {message}")]
    InvalidFile { message: String },

    #[error("Cannot {action} from the {stage:?} stage")]
    InvalidTransition { stage: Stage, action: &'static str },

    #[error("A request is already in flight")]
    RequestInFlight,

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntakeError {
    /// Backend failure with the generic fallback used when the response
    /// carries no usable error string
    pub fn malformed_response() -> Self {
        IntakeError::Backend {
            message: "Unknown error".to_string(),
        }
    }

    /// The message shown to the student. Backend-reported errors are
    /// surfaced verbatim; transport failures get a generic connectivity
    /// message rather than transport internals.
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::Connection { .. } => {
                "Could not connect to server. Is the backend running?".to_string()
            }
            IntakeError::Backend { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
