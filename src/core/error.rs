//! Tutor error types

use thiserror::Error;

/// Errors raised by the tutor's core and configuration layers
#[derive(Error, Debug)]
pub enum TutorError {
    /// A required credential is absent from the environment
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TutorError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        TutorError::InvalidConfig(msg.into())
    }
}

/// Result type alias for tutor operations
pub type TutorResult<T> = Result<T, TutorError>;
