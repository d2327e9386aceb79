use std::{fs, path::Path, path::PathBuf, time::Duration};

use anyhow::Context as _;
use chrono::{DateTime, Local};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use profile_controller::{ControllerMessage, Dispatch, Effect, PrintJob, ProfileController};
use shared::{PlayStyle, ProfileField};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::start_generation;
use crate::ui::report_view::show_report;
use crate::ui::theme::{card_frame, section_heading, PALETTE};

const PRINT_FILE_NAME: &str = "personality-report.txt";

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub config_path: Option<PathBuf>,
    pub print_dir: Option<PathBuf>,
}

fn default_print_dir() -> Option<PathBuf> {
    dirs::document_dir()
        .or_else(dirs::desktop_dir)
        .or_else(dirs::home_dir)
}

pub fn write_print_job(
    path: &Path,
    job: &PrintJob,
    printed_at: DateTime<Local>,
) -> anyhow::Result<()> {
    fs::write(path, job.render_text(printed_at))
        .with_context(|| format!("failed to write report to '{}'", path.display()))
}

pub struct PersonalityApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    controller: ProfileController,

    status: String,
    status_banner: Option<UiError>,
    print_dir: Option<PathBuf>,
}

impl PersonalityApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: &StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: ProfileController::new(),
            status: "Backend worker starting...".to_string(),
            status_banner: None,
            print_dir: startup.print_dir.clone(),
        }
    }

    /// Feeds one message to the controller and performs whatever effect it
    /// asks for. A generation that cannot be queued is failed immediately.
    fn dispatch(&mut self, message: ControllerMessage) {
        let mut pending = Some(message);
        while let Some(message) = pending.take() {
            let dismissing = matches!(message, ControllerMessage::NewAnalysis);
            match self.controller.dispatch(message) {
                Dispatch::Effect(Effect::StartGeneration {
                    request_id,
                    profile,
                }) => {
                    self.status_banner = None;
                    pending = start_generation(&self.cmd_tx, request_id, profile, &mut self.status);
                }
                Dispatch::Effect(Effect::Print(job)) => self.print(&job),
                Dispatch::Updated => {
                    if dismissing {
                        self.status_banner = None;
                    }
                }
                Dispatch::Ignored(reason) => {
                    tracing::debug!(?reason, "controller ignored ui message");
                }
            }
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(
                        category = ?err.category(),
                        context = ?err.context(),
                        "{}",
                        err.message()
                    );
                    self.status = format!("{} error: {}", err.label(), err.message());
                    self.status_banner = Some(err);
                }
                UiEvent::GenerationCompleted {
                    request_id,
                    outcome,
                } => {
                    self.dispatch(ControllerMessage::GenerationCompleted {
                        request_id,
                        outcome,
                    });
                    let analysis = self.controller.analysis();
                    if analysis.report().is_some() {
                        self.status = "Analysis complete".to_string();
                    } else if analysis.error().is_some() {
                        self.status = "Analysis failed".to_string();
                    }
                }
            }
        }
    }

    fn print(&mut self, job: &PrintJob) {
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(PRINT_FILE_NAME)
            .add_filter("Text", &["txt"]);
        if let Some(dir) = self.print_dir.clone().or_else(default_print_dir) {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            self.status = "Print cancelled".to_string();
            return;
        };

        match write_print_job(&path, job, Local::now()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "report printed to file");
                self.status = format!("Report saved to {}", path.display());
            }
            Err(err) => {
                self.status_banner = Some(UiError::from_message(
                    UiErrorContext::Print,
                    format!("{err:#}"),
                ));
            }
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Personality")
                        .monospace()
                        .strong()
                        .size(40.0)
                        .color(PALETTE.title_text),
                );
                ui.label(
                    egui::RichText::new(".exe")
                        .monospace()
                        .strong()
                        .size(40.0)
                        .color(PALETTE.accent_identity),
                );
            });
            ui.label(
                egui::RichText::new(
                    "Digital Identity Analysis Module // Map your preferences to professional potential.",
                )
                .size(15.0)
                .color(PALETTE.hint_text),
            );
            ui.add_space(20.0);
        });
    }

    fn field_input(&mut self, ui: &mut egui::Ui, field: ProfileField) {
        ui.label(egui::RichText::new(field.label()).color(PALETTE.hint_text));
        let mut value = self.controller.profile().field(field).to_string();
        let editor = if field.is_multiline() {
            egui::TextEdit::multiline(&mut value).desired_rows(3)
        } else {
            egui::TextEdit::singleline(&mut value)
        };
        let response = ui.add(
            editor
                .hint_text(field.placeholder())
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.dispatch(ControllerMessage::EditField { field, value });
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_heading(ui, "Identification", PALETTE.accent_identity);
            ui.columns(2, |columns| {
                self.field_input(&mut columns[0], ProfileField::Name);
                self.field_input(&mut columns[1], ProfileField::Grade);
            });
        });
        ui.add_space(16.0);

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_heading(ui, "Gaming Profile", PALETTE.accent_gaming);
            self.field_input(ui, ProfileField::Games);

            if self.controller.profile().has_entered_games() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Preferred Play Style").color(PALETTE.hint_text));
                let current = self.controller.profile().play_style;
                let mut chosen = current;
                ui.horizontal(|ui| {
                    for style in PlayStyle::ALL {
                        ui.selectable_value(&mut chosen, style, style.label());
                    }
                });
                if chosen != current {
                    self.dispatch(ControllerMessage::SelectPlayStyle(chosen));
                }
            }
        });
        ui.add_space(16.0);

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_heading(ui, "Hobbies & Interests", PALETTE.accent_hobbies);
            self.field_input(ui, ProfileField::Hobbies);
        });
        ui.add_space(20.0);

        let loading = self.controller.analysis().is_loading();
        let label = if loading {
            "Synthesizing Report..."
        } else {
            "Run AI Analysis"
        };
        ui.horizontal(|ui| {
            if loading {
                ui.add(egui::Spinner::new());
            }
            let submit = ui.add_enabled(
                self.controller.can_submit(),
                egui::Button::new(egui::RichText::new(label).strong().size(18.0))
                    .min_size(egui::vec2(ui.available_width(), 48.0)),
            );
            if submit.clicked() {
                self.dispatch(ControllerMessage::Submit);
            }
        });

        let mut print_failure = false;
        if let Some(error) = self.controller.analysis().error() {
            let classified = UiError::from_message(UiErrorContext::Generation, error);
            ui.add_space(12.0);
            egui::Frame::new()
                .fill(PALETTE.error_fill)
                .stroke(egui::Stroke::new(1.0, PALETTE.error_text))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        if let Some(headline) = classified.headline() {
                            ui.label(
                                egui::RichText::new(headline)
                                    .strong()
                                    .size(12.0)
                                    .color(PALETTE.error_text),
                            );
                        }
                        ui.colored_label(PALETTE.error_text, classified.message());
                        print_failure = ui.small_button("Print").clicked();
                    });
                });
        }
        if print_failure {
            self.dispatch(ControllerMessage::Print);
        }
    }

    fn show_report_screen(&mut self, ui: &mut egui::Ui) {
        let Some(report) = self.controller.analysis().report() else {
            return;
        };
        show_report(ui, report, self.controller.profile());

        ui.add_space(16.0);
        let mut print = false;
        let mut reset = false;
        ui.horizontal(|ui| {
            print = ui.button("Print Report").clicked();
            reset = ui.button("New Analysis").clicked();
        });
        if print {
            self.dispatch(ControllerMessage::Print);
        }
        if reset {
            self.dispatch(ControllerMessage::NewAnalysis);
        }
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            if let Some(banner) = &self.status_banner {
                ui.colored_label(
                    PALETTE.error_text,
                    format!("{} error: {}", banner.label(), banner.message()),
                );
            }
            ui.colored_label(PALETTE.footer_text, self.status.as_str());
            ui.label(
                egui::RichText::new("NEURAL PROCESSING MODULE V2.5 // STATUS: ONLINE")
                    .monospace()
                    .size(11.0)
                    .color(PALETTE.footer_text),
            );
        });
    }
}

impl eframe::App for PersonalityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(820.0);
                    self.show_header(ui);
                    if self.controller.analysis().report().is_some() {
                        self.show_report_screen(ui);
                    } else {
                        self.show_form(ui);
                    }
                    self.show_footer(ui);
                });
        });

        if self.controller.analysis().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use crossbeam_channel::bounded;
    use profile_controller::AnalysisState;
    use shared::{GenerationFailure, PersonalityReport, UserProfile};

    use super::*;

    fn app() -> (
        PersonalityApp,
        Receiver<BackendCommand>,
        Sender<UiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        (
            PersonalityApp::new(cmd_tx, ui_rx, &StartupConfig::default()),
            cmd_rx,
            ui_tx,
        )
    }

    fn report() -> PersonalityReport {
        PersonalityReport {
            personality_type: "The Strategist".into(),
            key_strengths: vec!["Planning".into()],
            thinking_work_style: "Deliberate".into(),
            preferred_learning_style: "Reading".into(),
            potential_skill_areas: vec!["Law".into()],
            positive_insight: "Patience pays.".into(),
        }
    }

    #[test]
    fn submit_queues_generation_and_completion_shows_report() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.dispatch(ControllerMessage::EditField {
            field: ProfileField::Name,
            value: "Ann".into(),
        });
        app.dispatch(ControllerMessage::Submit);
        app.dispatch(ControllerMessage::Submit);

        let BackendCommand::GenerateReport {
            request_id,
            profile,
        } = cmd_rx.try_recv().expect("queued command");
        assert_eq!(profile.name, "Ann");
        assert!(cmd_rx.try_recv().is_err(), "second submit must not queue");

        ui_tx
            .send(UiEvent::GenerationCompleted {
                request_id,
                outcome: Ok(report()),
            })
            .expect("send completion");
        app.process_ui_events();

        assert_eq!(app.controller.analysis(), &AnalysisState::Success(report()));
        assert_eq!(app.status, "Analysis complete");
    }

    #[test]
    fn disconnected_backend_surfaces_failure_instead_of_hanging() {
        let (mut app, cmd_rx, _ui_tx) = app();
        drop(cmd_rx);

        app.dispatch(ControllerMessage::Submit);

        assert!(!app.controller.analysis().is_loading());
        let error = app.controller.analysis().error().expect("error");
        assert!(error.contains("disconnected"));
    }

    #[test]
    fn backend_error_event_sets_banner() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "backend worker startup failure: failed to build runtime: connection refused",
            )))
            .expect("send error");

        app.process_ui_events();

        assert!(app.status_banner.is_some());
        assert!(app.status.starts_with("Connection error"));
    }

    #[test]
    fn failed_completion_reports_failure_status() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.dispatch(ControllerMessage::Submit);
        let BackendCommand::GenerateReport { request_id, .. } =
            cmd_rx.try_recv().expect("queued command");

        ui_tx
            .send(UiEvent::GenerationCompleted {
                request_id,
                outcome: Err(GenerationFailure::new("Service unavailable")),
            })
            .expect("send completion");
        app.process_ui_events();

        assert_eq!(app.controller.analysis().error(), Some("Service unavailable"));
        assert_eq!(app.status, "Analysis failed");
    }

    #[test]
    fn new_analysis_clears_print_error_banner() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.dispatch(ControllerMessage::Submit);
        let BackendCommand::GenerateReport { request_id, .. } =
            cmd_rx.try_recv().expect("queued command");
        ui_tx
            .send(UiEvent::GenerationCompleted {
                request_id,
                outcome: Ok(report()),
            })
            .expect("send completion");
        app.process_ui_events();
        app.status_banner = Some(UiError::from_message(
            UiErrorContext::Print,
            "failed to write report to '/nowhere/report.txt'",
        ));

        app.dispatch(ControllerMessage::NewAnalysis);

        assert!(app.controller.analysis().is_idle());
        assert!(app.status_banner.is_none());
    }

    #[test]
    fn writes_print_job_to_file() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("personality_print_test_{suffix}.txt"));
        let job = PrintJob::new(UserProfile::default(), AnalysisState::Success(report()));

        write_print_job(&path, &job, Local::now()).expect("write print job");

        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.contains("The Strategist"));
        fs::remove_file(path).expect("cleanup");
    }
}
