//! Error types for plancal.

use thiserror::Error;

/// Errors that can occur in plancal operations.
#[derive(Error, Debug)]
pub enum PlanCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid number of days '{0}'")]
    InvalidNumber(String),
}

impl From<serde_json::Error> for PlanCalError {
    fn from(err: serde_json::Error) -> Self {
        PlanCalError::Serialization(err.to_string())
    }
}

impl PlanCalError {
    /// True for errors caused by bad user input rather than by the store.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PlanCalError::InvalidDate(_) | PlanCalError::InvalidMonth(_) | PlanCalError::InvalidNumber(_)
        )
    }
}

/// Result type alias for plancal operations.
pub type PlanCalResult<T> = Result<T, PlanCalError>;
