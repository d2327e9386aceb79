//! Profile form controller: owns the profile draft and the analysis
//! lifecycle, and turns user actions and generation outcomes into the next
//! state plus the side effect the host must perform.

mod controller;
mod driver;
pub mod print;
mod state;

pub use controller::{ControllerMessage, Dispatch, Effect, IgnoreReason, ProfileController};
pub use driver::AnalysisDriver;
pub use print::PrintJob;
pub use state::{AnalysisState, RequestId};
