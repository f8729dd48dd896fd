//! Landing page — hero, feature grid, and the pricing section.

use egui::{self, RichText, Vec2};

use crate::pages::{footer, pricing, PageAction};
use crate::theme::{Palette, PANEL_ROUNDING};

const FEATURES: [(&str, &str); 6] = [
    ("Model Variety", "Switch between GPT-4, Claude, Gemini and more."),
    ("File Uploads", "Analyze PDFs, docs, spreadsheets and code."),
    ("Voice Ready", "Talk hands-free with real-time voice."),
    ("Code Native", "Syntax highlighting, review, and fixes."),
    ("Multimodal", "Understand images and generate visuals."),
    ("Privacy First", "Enterprise-grade security & controls."),
];

pub fn home_page(ui: &mut egui::Ui, palette: &Palette) -> Option<PageAction> {
    let mut action = None;

    hero(ui, palette, &mut action);
    ui.add_space(32.0);
    features_section(ui, palette);
    ui.add_space(32.0);
    if let Some(pricing_action) = pricing::pricing_section(ui, palette) {
        action = Some(pricing_action);
    }
    footer(ui, palette);

    action
}

fn hero(ui: &mut egui::Ui, palette: &Palette, action: &mut Option<PageAction>) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("New • Multimodal + Voice")
                .color(palette.text_secondary)
                .small(),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new("Your AI Assistant for Everything")
                .color(palette.text_primary)
                .strong()
                .size(36.0),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Chat with state-of-the-art models, analyze files, generate code, \
                 and collaborate in real time, all in one beautiful, secure platform.",
            )
            .color(palette.text_secondary)
            .size(16.0),
        );
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            // Center the button pair
            let spacing = (ui.available_width() - 280.0).max(0.0) / 2.0;
            ui.add_space(spacing);
            let start = ui.add(
                egui::Button::new(RichText::new("Start Chatting").color(palette.on_accent))
                    .fill(palette.accent)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(130.0, 34.0)),
            );
            if start.clicked() {
                *action = Some(PageAction::OpenChat);
            }
            let view = ui.add(
                egui::Button::new(RichText::new("View Pricing").color(palette.text_primary))
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(130.0, 34.0)),
            );
            if view.clicked() {
                *action = Some(PageAction::OpenPricing);
            }
        });
        ui.add_space(8.0);
        ui.label(
            RichText::new("Free tier available • No credit card required")
                .color(palette.text_secondary)
                .small(),
        );
    });
}

fn features_section(ui: &mut egui::Ui, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Everything you need to think and build")
                .color(palette.text_primary)
                .strong()
                .size(24.0),
        );
        ui.label(
            RichText::new(
                "A modern conversational workspace designed for creators, teams, and enterprises.",
            )
            .color(palette.text_secondary),
        );
    });
    ui.add_space(16.0);

    for row in FEATURES.chunks(3) {
        ui.columns(row.len(), |cols| {
            for (col, (title, desc)) in cols.iter_mut().zip(row) {
                egui::Frame::default()
                    .fill(palette.bg_secondary)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(12.0)
                    .show(col, |ui| {
                        ui.label(RichText::new(*title).color(palette.text_primary).strong());
                        ui.label(RichText::new(*desc).color(palette.text_secondary).small());
                    });
            }
        });
        ui.add_space(8.0);
    }
}
