//! Domain types shared by the controller, the report client, and both front ends.

pub mod domain;
pub mod error;

pub use domain::{PersonalityReport, PlayStyle, ProfileField, UserProfile};
pub use error::{GenerationFailure, GENERIC_FAILURE_MESSAGE};
