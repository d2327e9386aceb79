use shared::{GenerationFailure, PersonalityReport, PlayStyle, ProfileField, UserProfile};
use tracing::{debug, info, warn};

use crate::{
    print::PrintJob,
    state::{AnalysisState, RequestId},
};

/// One message per user action, plus the completion of an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerMessage {
    EditField {
        field: ProfileField,
        value: String,
    },
    SelectPlayStyle(PlayStyle),
    Submit,
    GenerationCompleted {
        request_id: RequestId,
        outcome: Result<PersonalityReport, GenerationFailure>,
    },
    Print,
    NewAnalysis,
}

impl ControllerMessage {
    pub fn name(&self) -> &'static str {
        match self {
            ControllerMessage::EditField { .. } => "edit_field",
            ControllerMessage::SelectPlayStyle(_) => "select_play_style",
            ControllerMessage::Submit => "submit",
            ControllerMessage::GenerationCompleted { .. } => "generation_completed",
            ControllerMessage::Print => "print",
            ControllerMessage::NewAnalysis => "new_analysis",
        }
    }
}

/// Side effects the host performs on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the report generator with this snapshot and feed the outcome back
    /// as [`ControllerMessage::GenerationCompleted`] with the same id.
    StartGeneration {
        request_id: RequestId,
        profile: UserProfile,
    },
    Print(PrintJob),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyLoading,
    ReportDisplayed,
    StaleCompletion,
    NothingToPrint,
    NoReportToDismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Updated,
    Effect(Effect),
    Ignored(IgnoreReason),
}

impl Dispatch {
    pub fn into_effect(self) -> Option<Effect> {
        match self {
            Dispatch::Effect(effect) => Some(effect),
            _ => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Dispatch::Ignored(_))
    }
}

#[derive(Debug, Default)]
pub struct ProfileController {
    profile: UserProfile,
    analysis: AnalysisState,
    last_request_id: u64,
}

impl ProfileController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.analysis.is_loading()
    }

    pub fn dispatch(&mut self, message: ControllerMessage) -> Dispatch {
        debug!(
            message = message.name(),
            state = self.analysis.label(),
            "dispatching controller message"
        );

        match message {
            ControllerMessage::EditField { field, value } => {
                self.edit_profile(|profile| profile.set_field(field, value))
            }
            ControllerMessage::SelectPlayStyle(style) => {
                self.edit_profile(|profile| profile.set_play_style(style))
            }
            ControllerMessage::Submit => self.submit(),
            ControllerMessage::GenerationCompleted {
                request_id,
                outcome,
            } => self.complete(request_id, outcome),
            ControllerMessage::Print => self.print(),
            ControllerMessage::NewAnalysis => self.new_analysis(),
        }
    }

    fn edit_profile(&mut self, apply: impl FnOnce(&mut UserProfile)) -> Dispatch {
        match &self.analysis {
            // The form is hidden behind the report; edits would silently
            // change the profile shown next to it.
            AnalysisState::Success(_) => return Dispatch::Ignored(IgnoreReason::ReportDisplayed),
            AnalysisState::Failed(_) => self.analysis = AnalysisState::Idle,
            AnalysisState::Idle | AnalysisState::Loading(_) => {}
        }
        apply(&mut self.profile);
        Dispatch::Updated
    }

    fn submit(&mut self) -> Dispatch {
        if let Some(in_flight) = self.analysis.in_flight() {
            debug!(%in_flight, "submit ignored while a report is being generated");
            return Dispatch::Ignored(IgnoreReason::AlreadyLoading);
        }

        self.last_request_id += 1;
        let request_id = RequestId(self.last_request_id);
        self.analysis = AnalysisState::Loading(request_id);
        info!(%request_id, "personality analysis started");

        Dispatch::Effect(Effect::StartGeneration {
            request_id,
            profile: self.profile.clone(),
        })
    }

    fn complete(
        &mut self,
        request_id: RequestId,
        outcome: Result<PersonalityReport, GenerationFailure>,
    ) -> Dispatch {
        if self.analysis.in_flight() != Some(request_id) {
            warn!(
                %request_id,
                state = self.analysis.label(),
                "discarding completion that does not match the in-flight request"
            );
            return Dispatch::Ignored(IgnoreReason::StaleCompletion);
        }

        self.analysis = match outcome {
            Ok(report) => {
                info!(%request_id, personality_type = %report.personality_type, "personality analysis succeeded");
                AnalysisState::Success(report)
            }
            Err(failure) => {
                let message = failure.user_message().to_string();
                warn!(%request_id, "personality analysis failed: {message}");
                AnalysisState::Failed(message)
            }
        };
        Dispatch::Updated
    }

    fn print(&self) -> Dispatch {
        match &self.analysis {
            AnalysisState::Success(_) | AnalysisState::Failed(_) => {
                Dispatch::Effect(Effect::Print(PrintJob::new(
                    self.profile.clone(),
                    self.analysis.clone(),
                )))
            }
            AnalysisState::Idle | AnalysisState::Loading(_) => {
                Dispatch::Ignored(IgnoreReason::NothingToPrint)
            }
        }
    }

    fn new_analysis(&mut self) -> Dispatch {
        if !matches!(self.analysis, AnalysisState::Success(_)) {
            return Dispatch::Ignored(IgnoreReason::NoReportToDismiss);
        }
        self.analysis = AnalysisState::Idle;
        self.profile = UserProfile::default();
        info!("report dismissed; profile reset");
        Dispatch::Updated
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
