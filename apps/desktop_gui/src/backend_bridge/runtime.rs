//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use report_client::ReportGenerator;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. Each command runs as its own task on a
/// dedicated tokio runtime; results come back as [`UiEvent`]s.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    generator: Arc<dyn ReportGenerator>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend received command");
                match cmd {
                    BackendCommand::GenerateReport {
                        request_id,
                        profile,
                    } => {
                        let generator = Arc::clone(&generator);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = generator.generate_report(&profile).await;
                            // Blocking send: dropping a completion would leave
                            // the controller loading forever.
                            if ui_tx
                                .send(UiEvent::GenerationCompleted {
                                    request_id,
                                    outcome,
                                })
                                .is_err()
                            {
                                tracing::debug!(%request_id, "ui closed before report arrived");
                            }
                        });
                    }
                }
            }

            tracing::info!("backend command queue closed; worker exiting");
        });
    })
}
