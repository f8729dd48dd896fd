//! Settings dialog — theme and default model are wired; the remaining
//! toggles are display-only stubs kept for parity with the product design.

use egui::{self, RichText, Vec2};

use novachat_types::model::ChatModel;
use novachat_types::settings::{Settings, ThemeChoice};

use crate::state::UiState;
use crate::theme::{Palette, PANEL_ROUNDING};

/// What the caller should do after rendering the settings dialog.
pub enum SettingsAction {
    /// The theme selection changed; re-apply and persist.
    ThemeChanged,
    /// The default model changed.
    ModelChanged(ChatModel),
    /// The user clicked Save.
    Saved,
    /// A stubbed control was activated.
    Stub(&'static str),
}

/// Render the settings dialog. Returns at most one action per frame.
pub fn settings_dialog(
    ctx: &egui::Context,
    state: &mut UiState,
    settings: &mut Settings,
    model: ChatModel,
    palette: &Palette,
) -> Option<SettingsAction> {
    let mut action = None;
    let mut open = state.show_settings;

    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Manage your preferences")
                    .color(palette.text_secondary)
                    .small(),
            );
            ui.separator();

            // ── General ──────────────────────────────────────
            ui.label(RichText::new("General").color(palette.accent).strong());

            ui.label(RichText::new("Theme mode").color(palette.text_secondary).small());
            egui::ComboBox::from_id_salt("settings_theme")
                .selected_text(settings.theme.label())
                .show_ui(ui, |ui| {
                    for theme in ThemeChoice::all() {
                        if ui
                            .selectable_value(&mut settings.theme, *theme, theme.label())
                            .changed()
                        {
                            action = Some(SettingsAction::ThemeChanged);
                        }
                    }
                });

            ui.add_space(4.0);
            ui.label(
                RichText::new("Default model")
                    .color(palette.text_secondary)
                    .small(),
            );
            egui::ComboBox::from_id_salt("settings_model")
                .selected_text(model.label())
                .show_ui(ui, |ui| {
                    for candidate in ChatModel::all() {
                        if ui
                            .selectable_label(model == *candidate, candidate.label())
                            .clicked()
                        {
                            action = Some(SettingsAction::ModelChanged(*candidate));
                        }
                    }
                });

            ui.add_space(8.0);
            ui.separator();

            // ── Chat behavior ────────────────────────────────
            ui.label(RichText::new("Chat behavior").color(palette.accent).strong());
            ui.checkbox(&mut state.autosave_enabled, "Auto-save conversations");
            ui.checkbox(&mut state.sound_enabled, "Sound notifications");

            ui.add_space(8.0);
            ui.separator();

            // ── Privacy & data ───────────────────────────────
            ui.label(RichText::new("Privacy & Data").color(palette.accent).strong());
            if ui.button("Download my data").clicked() {
                action = Some(SettingsAction::Stub("Data export coming soon"));
            }
            if ui.button("Delete conversation history").clicked() {
                action = Some(SettingsAction::Stub("History deletion coming soon"));
            }

            ui.add_space(12.0);
            let save = ui.add(
                egui::Button::new(RichText::new("Save").color(palette.on_accent).strong())
                    .fill(palette.accent)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(96.0, 26.0)),
            );
            if save.clicked() {
                action = Some(SettingsAction::Saved);
            }
        });

    state.show_settings = open;
    action
}
