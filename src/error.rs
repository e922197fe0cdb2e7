//! Error types for the notifier.

use thiserror::Error;

/// Main error type for publisher operations.
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Subscriber not found: {0}")]
    SubscriberNotFound(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for NotifierError {
    fn from(e: serde_json::Error) -> Self {
        NotifierError::InvalidConfig(e.to_string())
    }
}

/// Result type for publisher operations.
pub type Result<T> = std::result::Result<T, NotifierError>;
