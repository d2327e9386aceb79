use std::path::PathBuf;

use shared::GenerationFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportClientError {
    #[error(
        "No Gemini API key configured. Set GEMINI_API_KEY or add api_key to personality.toml and retry."
    )]
    MissingApiKey,
    #[error("failed to read settings file {}: {source}", .path.display())]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings file {}: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid report service endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("failed to reach the report service: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status. `message` is the provider's own description
    /// when the error body carried one.
    #[error("{message}")]
    Provider { status: u16, message: String },
    #[error("the report service declined the request ({reason})")]
    Blocked { reason: String },
    #[error("the report service returned no report content")]
    EmptyResponse,
    #[error("the report service returned a malformed report: {0}")]
    MalformedReport(#[source] serde_json::Error),
}

impl From<ReportClientError> for GenerationFailure {
    fn from(value: ReportClientError) -> Self {
        GenerationFailure::new(value.to_string())
    }
}
