use eframe::egui;
use egui::Color32;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub input_fill: Color32,
    pub title_text: Color32,
    pub body_text: Color32,
    pub hint_text: Color32,
    pub footer_text: Color32,
    pub accent_identity: Color32,
    pub accent_gaming: Color32,
    pub accent_hobbies: Color32,
    pub error_text: Color32,
    pub error_fill: Color32,
}

pub const PALETTE: Palette = Palette {
    background: Color32::from_rgb(0x0b, 0x0c, 0x0e),
    card: Color32::from_rgb(0x12, 0x13, 0x16),
    card_stroke: Color32::from_rgb(0x23, 0x24, 0x28),
    input_fill: Color32::from_rgb(0x1a, 0x1b, 0x1e),
    title_text: Color32::from_rgb(0xf8, 0xfa, 0xfc),
    body_text: Color32::from_rgb(0xe2, 0xe8, 0xf0),
    hint_text: Color32::from_rgb(0x94, 0xa3, 0xb8),
    footer_text: Color32::from_rgb(0x47, 0x55, 0x69),
    accent_identity: Color32::from_rgb(0x63, 0x66, 0xf1),
    accent_gaming: Color32::from_rgb(0x3b, 0x82, 0xf6),
    accent_hobbies: Color32::from_rgb(0x10, 0xb9, 0x81),
    error_text: Color32::from_rgb(0xf8, 0x71, 0x71),
    error_fill: Color32::from_rgb(0x2a, 0x14, 0x16),
};

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PALETTE.background;
    visuals.window_fill = PALETTE.card;
    visuals.extreme_bg_color = PALETTE.input_fill;
    visuals.override_text_color = Some(PALETTE.body_text);
    visuals.widgets.inactive.bg_stroke.color = PALETTE.card_stroke;
    visuals.selection.bg_fill = PALETTE.accent_gaming;
    ctx.set_visuals(visuals);
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(PALETTE.card)
        .stroke(egui::Stroke::new(1.0, PALETTE.card_stroke))
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::same(20))
}

/// Card heading with the colored marker bar used by each form section.
pub fn section_heading(ui: &mut egui::Ui, title: &str, accent: Color32) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(5.0, 20.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 3.0, accent);
        ui.label(
            egui::RichText::new(title)
                .strong()
                .size(17.0)
                .color(PALETTE.body_text),
        );
    });
    ui.separator();
}
