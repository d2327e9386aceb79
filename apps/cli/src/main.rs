use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use profile_controller::{AnalysisDriver, AnalysisState, ControllerMessage, Effect};
use report_client::config::load_settings_from;
use shared::{PlayStyle, ProfileField};
use tracing_subscriber::EnvFilter;

/// Generate a personality report from a gaming and hobby profile.
#[derive(Parser, Debug)]
#[command(name = "personality")]
struct Args {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    grade: String,
    /// Favorite games or genres.
    #[arg(long, default_value = "")]
    games: String,
    #[arg(long, default_value = "")]
    hobbies: String,
    #[arg(long, default_value = "Solo", value_parser = str::parse::<PlayStyle>)]
    play_style: PlayStyle,
    /// Print the raw report as JSON instead of the printable text view.
    #[arg(long)]
    json: bool,
    /// Settings file (defaults to ./personality.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn profile_messages(&self) -> Vec<ControllerMessage> {
        let mut messages: Vec<ControllerMessage> = [
            (ProfileField::Name, &self.name),
            (ProfileField::Grade, &self.grade),
            (ProfileField::Games, &self.games),
            (ProfileField::Hobbies, &self.hobbies),
        ]
        .into_iter()
        .map(|(field, value)| ControllerMessage::EditField {
            field,
            value: value.clone(),
        })
        .collect();
        messages.push(ControllerMessage::SelectPlayStyle(self.play_style));
        messages
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => load_settings_from(path, |name| std::env::var(name).ok())
            .context("failed to load settings")?,
        None => report_client::load_settings(),
    };
    let generator = report_client::generator_from_settings(&settings)
        .context("failed to configure report generation")?;

    let mut driver = AnalysisDriver::new(generator);
    for message in args.profile_messages() {
        driver.dispatch(message);
    }

    let analysis = driver.submit_and_wait().await.clone();
    match analysis {
        AnalysisState::Success(report) if args.json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        AnalysisState::Success(_) => {
            if let Some(Effect::Print(job)) = driver.dispatch(ControllerMessage::Print).into_effect()
            {
                print!("{}", job.render_text(chrono::Local::now()));
            }
        }
        AnalysisState::Failed(message) => {
            eprintln!("Analysis failed: {message}");
            return Ok(ExitCode::FAILURE);
        }
        other => {
            tracing::error!(state = other.label(), "analysis did not settle");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
