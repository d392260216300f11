//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Argument-count mismatches against a command's declared parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("too many arguments: at most {max} accepted")]
    TooManyArguments { max: usize },
}

/// Abnormal handler termination, reported at the dispatch boundary.
///
/// Carries a message only; this is the explicit result type that replaces
/// exception-style propagation for expected, recoverable outcomes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExecutionError {
    message: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ExecutionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ExecutionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
