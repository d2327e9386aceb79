//! Backend-to-UI events and error modeling for the desktop GUI.

use profile_controller::RequestId;
use shared::{GenerationFailure, PersonalityReport};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    GenerationCompleted {
        request_id: RequestId,
        outcome: Result<PersonalityReport, GenerationFailure>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Generation,
    Print,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("401")
            || message_lower.contains("403")
            || message_lower.contains("api key")
            || message_lower.contains("unauthorized")
            || message_lower.contains("permission denied")
        {
            UiErrorCategory::Auth
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("failed to reach")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Transport
        } else if message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("declined")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Auth => "Configuration",
            UiErrorCategory::Transport => "Connection",
            UiErrorCategory::Validation => "Response",
            UiErrorCategory::Unknown => "Unexpected",
        }
    }

    /// Heading shown above the verbatim message. Unclassified errors get none.
    pub fn headline(&self) -> Option<&'static str> {
        match self.category {
            UiErrorCategory::Unknown => None,
            _ => Some(self.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GENERIC_FAILURE_MESSAGE;

    #[test]
    fn missing_api_key_is_a_configuration_problem() {
        let err = UiError::from_message(
            UiErrorContext::Generation,
            "No Gemini API key configured. Set GEMINI_API_KEY or add api_key to personality.toml and retry.",
        );
        assert_eq!(err.category(), UiErrorCategory::Auth);
        assert_eq!(err.label(), "Configuration");
    }

    #[test]
    fn provider_outage_is_transport() {
        let err = UiError::from_message(UiErrorContext::Generation, "Service unavailable");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.message(), "Service unavailable");
    }

    #[test]
    fn malformed_report_is_validation() {
        let err = UiError::from_message(
            UiErrorContext::Generation,
            "the report service returned a malformed report: missing field `keyStrengths`",
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
    }

    #[test]
    fn fallback_message_is_unknown() {
        let err = UiError::from_message(UiErrorContext::Print, GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.context(), UiErrorContext::Print);
    }

    #[test]
    fn unclassified_errors_have_no_headline_and_keep_their_text() {
        let err = UiError::from_message(UiErrorContext::Generation, GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.headline(), None);
        assert_eq!(err.message(), GENERIC_FAILURE_MESSAGE);

        let err = UiError::from_message(UiErrorContext::Generation, "Service unavailable");
        assert_eq!(err.headline(), Some("Connection"));
        assert_eq!(err.message(), "Service unavailable");
    }
}
