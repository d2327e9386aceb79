use std::sync::Arc;

use report_client::ReportGenerator;
use tokio::sync::mpsc;

use crate::{
    controller::{ControllerMessage, Dispatch, Effect, ProfileController},
    state::{AnalysisState, RequestId},
};
use shared::{GenerationFailure, UserProfile};

/// Async host for a [`ProfileController`]. Each submission runs as its own
/// tokio task whose outcome is routed back through a channel, so the
/// controller is only ever touched by the owner of the driver.
///
/// Must be used from within a tokio runtime.
pub struct AnalysisDriver {
    controller: ProfileController,
    generator: Arc<dyn ReportGenerator>,
    completions_tx: mpsc::UnboundedSender<ControllerMessage>,
    completions_rx: mpsc::UnboundedReceiver<ControllerMessage>,
}

impl AnalysisDriver {
    pub fn new(generator: Arc<dyn ReportGenerator>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            controller: ProfileController::new(),
            generator,
            completions_tx,
            completions_rx,
        }
    }

    pub fn controller(&self) -> &ProfileController {
        &self.controller
    }

    /// Applies `message`. A `StartGeneration` effect is handled here by
    /// spawning the request; any other effect is left to the caller.
    pub fn dispatch(&mut self, message: ControllerMessage) -> Dispatch {
        let dispatch = self.controller.dispatch(message);
        if let Dispatch::Effect(Effect::StartGeneration {
            request_id,
            profile,
        }) = &dispatch
        {
            self.spawn_generation(*request_id, profile.clone());
        }
        dispatch
    }

    /// The request runs in its own task so a panicking generator still
    /// produces a completion instead of leaving the controller in `Loading`.
    fn spawn_generation(&self, request_id: RequestId, profile: UserProfile) {
        let generator = Arc::clone(&self.generator);
        let completions_tx = self.completions_tx.clone();
        let request = tokio::spawn(async move { generator.generate_report(&profile).await });
        tokio::spawn(async move {
            let outcome = match request.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::error!(%request_id, "report generation task failed: {err}");
                    Err(GenerationFailure::new(format!(
                        "report generation task failed: {err}"
                    )))
                }
            };
            if completions_tx
                .send(ControllerMessage::GenerationCompleted {
                    request_id,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!(%request_id, "driver dropped before generation completed");
            }
        });
    }

    /// Waits for the next generation outcome and applies it.
    pub async fn next_completion(&mut self) -> Option<Dispatch> {
        let message = self.completions_rx.recv().await?;
        Some(self.controller.dispatch(message))
    }

    /// Submits the current profile and waits until the lifecycle settles.
    pub async fn submit_and_wait(&mut self) -> &AnalysisState {
        self.dispatch(ControllerMessage::Submit);
        while self.controller.analysis().is_loading() {
            if self.next_completion().await.is_none() {
                break;
            }
        }
        self.controller.analysis()
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
