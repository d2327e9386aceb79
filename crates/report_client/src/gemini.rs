//! Google Gemini `generateContent` client producing personality reports.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{GenerationFailure, PersonalityReport, UserProfile};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::GenerationSettings,
    error::ReportClientError,
    prompt::{build_prompt, report_response_schema},
    ReportGenerator,
};

pub struct GeminiReportClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl GeminiReportClient {
    pub fn new(settings: &GenerationSettings) -> Result<Self, ReportClientError> {
        Self::with_http_client(Client::new(), settings)
    }

    pub fn with_http_client(
        client: Client,
        settings: &GenerationSettings,
    ) -> Result<Self, ReportClientError> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ReportClientError::MissingApiKey)?
            .to_string();
        let endpoint = settings.endpoint_url()?;

        Ok(Self {
            client,
            api_key,
            model: settings.model.trim().to_string(),
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.as_str().trim_end_matches('/'),
            self.model
        )
    }

    pub async fn request_report(
        &self,
        profile: &UserProfile,
    ) -> Result<PersonalityReport, ReportClientError> {
        let prompt = build_prompt(profile);
        let request = GenerateContentRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: report_response_schema(),
            },
        };

        debug!(model = %self.model, "requesting personality report");
        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = provider_error_message(&body)
                .unwrap_or_else(|| format!("report service returned HTTP {status}"));
            warn!(status = status.as_u16(), "report service rejected request: {message}");
            return Err(ReportClientError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let report = report_from_response(body)?;
        info!(personality_type = %report.personality_type, "personality report received");
        Ok(report)
    }
}

#[async_trait]
impl ReportGenerator for GeminiReportClient {
    async fn generate_report(
        &self,
        profile: &UserProfile,
    ) -> Result<PersonalityReport, GenerationFailure> {
        self.request_report(profile).await.map_err(Into::into)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorEnvelope {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ProviderErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
}

pub(crate) fn report_from_response(
    body: GenerateContentResponse,
) -> Result<PersonalityReport, ReportClientError> {
    if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ReportClientError::Blocked { reason });
    }

    let Some(candidate) = body.candidates.into_iter().next() else {
        return Err(ReportClientError::EmptyResponse);
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return match candidate.finish_reason {
            Some(reason) if reason != "STOP" => Err(ReportClientError::Blocked { reason }),
            _ => Err(ReportClientError::EmptyResponse),
        };
    }

    parse_report_text(&text)
}

/// Accepts bare JSON or JSON wrapped in a markdown code fence.
pub(crate) fn parse_report_text(text: &str) -> Result<PersonalityReport, ReportClientError> {
    let trimmed = text.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(unfenced.trim()).map_err(ReportClientError::MalformedReport)
}
