use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use report_client::config::load_settings_from;
use tracing_subscriber::EnvFilter;
use ui::{PersonalityApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Settings file (defaults to ./personality.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory the print dialog opens in.
    #[arg(long)]
    print_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let startup = StartupConfig {
        config_path: args.config,
        print_dir: args.print_dir,
    };

    let settings = match &startup.config_path {
        Some(path) => load_settings_from(path, |name| std::env::var(name).ok())
            .context("failed to load settings")?,
        None => report_client::load_settings(),
    };
    let generator = report_client::generator_from_settings(&settings)
        .context("failed to configure report generation")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, generator);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Personality.exe")
            .with_inner_size([900.0, 960.0])
            .with_min_inner_size([560.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Personality.exe",
        options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(PersonalityApp::new(cmd_tx, ui_rx, &startup)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
