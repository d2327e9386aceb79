//! Backend commands queued from UI to backend worker.

use profile_controller::RequestId;
use shared::UserProfile;

pub enum BackendCommand {
    GenerateReport {
        request_id: RequestId,
        profile: UserProfile,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::GenerateReport { .. } => "generate_report",
        }
    }
}
