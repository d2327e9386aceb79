use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when a generation failure carries no description of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// The only error kind crossing the report generation boundary. Transport
/// problems, provider errors, and malformed responses all collapse into it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", describe(.message))]
pub struct GenerationFailure {
    message: Option<String>,
}

fn describe(message: &Option<String>) -> &str {
    message
        .as_deref()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(GENERIC_FAILURE_MESSAGE)
}

impl GenerationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }

    /// Never empty: blank or missing descriptions fall back to
    /// [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> &str {
        describe(&self.message)
    }
}
