//! Report generation boundary: the [`ReportGenerator`] trait consumed by the
//! profile controller, plus the Gemini-backed implementation.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{GenerationFailure, PersonalityReport, UserProfile};

pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;

pub use config::{load_settings, GenerationSettings};
pub use error::ReportClientError;
pub use gemini::GeminiReportClient;

/// Single-shot, no retry, no cancellation. Callers await exactly one outcome
/// per profile submitted.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate_report(
        &self,
        profile: &UserProfile,
    ) -> Result<PersonalityReport, GenerationFailure>;
}

/// Stands in when no API key is configured so the UI still starts and the
/// user sees how to fix it on first submit.
pub struct MissingReportGenerator;

#[async_trait]
impl ReportGenerator for MissingReportGenerator {
    async fn generate_report(
        &self,
        _profile: &UserProfile,
    ) -> Result<PersonalityReport, GenerationFailure> {
        Err(ReportClientError::MissingApiKey.into())
    }
}

pub fn generator_from_settings(
    settings: &GenerationSettings,
) -> Result<Arc<dyn ReportGenerator>, ReportClientError> {
    if !settings.has_api_key() {
        tracing::warn!("no Gemini API key configured; report generation will fail until one is set");
        // Still surface a bad endpoint at startup.
        settings.endpoint_url()?;
        return Ok(Arc::new(MissingReportGenerator));
    }

    let client = GeminiReportClient::new(settings)?;
    tracing::info!(model = client.model(), "report generation via Gemini");
    Ok(Arc::new(client))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
