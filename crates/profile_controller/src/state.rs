use std::fmt;

use shared::PersonalityReport;

/// Identifies one submission; completions for any other id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the latest analysis attempt. Exactly one of idle, loading,
/// report present, or error present holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading(RequestId),
    Success(PersonalityReport),
    Failed(String),
}

impl AnalysisState {
    pub fn is_idle(&self) -> bool {
        matches!(self, AnalysisState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&PersonalityReport> {
        match self {
            AnalysisState::Success(report) => Some(report),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self {
            AnalysisState::Loading(request_id) => Some(*request_id),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Loading(_) => "loading",
            AnalysisState::Success(_) => "success",
            AnalysisState::Failed(_) => "failed",
        }
    }
}
