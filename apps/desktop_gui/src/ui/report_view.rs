use eframe::egui;
use profile_controller::print::{report_sections, SectionBody};
use shared::{PersonalityReport, UserProfile};

use crate::ui::theme::{card_frame, PALETTE};

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

pub fn show_report(ui: &mut egui::Ui, report: &PersonalityReport, profile: &UserProfile) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(
            egui::RichText::new("ANALYSIS COMPLETE")
                .monospace()
                .size(12.0)
                .color(PALETTE.accent_identity),
        );
        ui.label(
            egui::RichText::new(&report.personality_type)
                .strong()
                .size(30.0)
                .color(PALETTE.title_text),
        );
        ui.add_space(4.0);
        ui.colored_label(
            PALETTE.hint_text,
            format!(
                "{} // {} // {} player",
                or_dash(&profile.name),
                or_dash(&profile.grade),
                profile.play_style
            ),
        );
        ui.separator();

        for (title, body) in report_sections(report) {
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(title)
                    .strong()
                    .size(16.0)
                    .color(PALETTE.body_text),
            );
            match body {
                SectionBody::Text(text) => {
                    ui.label(egui::RichText::new(text).color(PALETTE.hint_text));
                }
                SectionBody::List(items) => {
                    ui.horizontal_wrapped(|ui| {
                        for item in items {
                            egui::Frame::new()
                                .fill(PALETTE.input_fill)
                                .stroke(egui::Stroke::new(1.0, PALETTE.card_stroke))
                                .corner_radius(egui::CornerRadius::same(8))
                                .inner_margin(egui::Margin::symmetric(10, 4))
                                .show(ui, |ui| {
                                    ui.colored_label(PALETTE.body_text, item.as_str());
                                });
                        }
                    });
                }
            }
        }
    });
}
