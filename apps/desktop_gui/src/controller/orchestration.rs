//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use profile_controller::{ControllerMessage, RequestId};
use shared::{GenerationFailure, UserProfile};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<(), String> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            Err(status.clone())
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            Err(status.clone())
        }
    }
}

/// Queues report generation. If the command cannot be queued, returns the
/// failed completion to feed back so the controller leaves `Loading`.
pub fn start_generation(
    cmd_tx: &Sender<BackendCommand>,
    request_id: RequestId,
    profile: UserProfile,
    status: &mut String,
) -> Option<ControllerMessage> {
    let cmd = BackendCommand::GenerateReport {
        request_id,
        profile,
    };
    match dispatch_backend_command(cmd_tx, cmd, status) {
        Ok(()) => {
            *status = "Synthesizing report...".to_string();
            None
        }
        Err(message) => Some(ControllerMessage::GenerationCompleted {
            request_id,
            outcome: Err(GenerationFailure::new(message)),
        }),
    }
}
