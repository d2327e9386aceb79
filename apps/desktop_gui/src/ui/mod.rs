//! UI layer for desktop GUI: app shell, report view, and theme.

pub mod app;
pub mod report_view;
pub mod theme;

pub use app::{PersonalityApp, StartupConfig};
