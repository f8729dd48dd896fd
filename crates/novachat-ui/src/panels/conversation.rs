//! Conversation panel — header with inline rename, the message list with
//! typing indicator, and the input row with model picker.

use egui::{self, Align, Key, Layout, RichText, ScrollArea, Vec2};

use novachat_core::store::SessionStore;
use novachat_types::message::{Message, Role};
use novachat_types::model::ChatModel;

use crate::state::UiState;
use crate::theme::{Palette, PANEL_ROUNDING};

/// What the caller should do after rendering the conversation panel.
pub enum ChatAction {
    Send(String),
    Rename(String),
    ToggleSidebar,
    OpenSettings,
    Copy(String),
    SetModel(ChatModel),
    Stub(&'static str),
}

/// Render the conversation panel. Returns at most one action per frame.
pub fn conversation_panel(
    ui: &mut egui::Ui,
    store: &SessionStore,
    state: &mut UiState,
    sidebar_open: bool,
    palette: &Palette,
) -> Option<ChatAction> {
    let mut action = None;

    render_header(ui, store, state, sidebar_open, palette, &mut action);
    ui.separator();

    let now = ui.input(|i| i.time);
    if let Some(text) = state.notice(now) {
        let text = text.to_string();
        ui.label(RichText::new(text).color(palette.text_secondary).small());
    }

    let input_height = 76.0;
    let messages_height = ui.available_height() - input_height;

    ScrollArea::vertical()
        .max_height(messages_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in &store.active_conversation().messages {
                render_message(ui, message, palette, &mut action);
                ui.add_space(4.0);
            }

            if store.is_replying(store.active_id()) {
                render_typing_indicator(ui, palette);
            }
        });

    ui.add_space(8.0);
    render_input_row(ui, store, state, palette, &mut action);

    action
}

fn render_header(
    ui: &mut egui::Ui,
    store: &SessionStore,
    state: &mut UiState,
    sidebar_open: bool,
    palette: &Palette,
    action: &mut Option<ChatAction>,
) {
    ui.horizontal(|ui| {
        let toggle = ui
            .button("☰")
            .on_hover_text(if sidebar_open { "Hide sidebar" } else { "Show sidebar" });
        if toggle.clicked() {
            *action = Some(ChatAction::ToggleSidebar);
        }

        ui.label(RichText::new("/").color(palette.text_secondary));

        if state.editing_title {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.title_input).desired_width(220.0),
            );
            if ui.input(|i| i.key_pressed(Key::Escape)) {
                state.cancel_title_edit();
            } else if response.lost_focus() {
                // Enter and blur both commit; the store keeps the previous
                // title when the buffer is empty
                *action = Some(ChatAction::Rename(state.take_title_edit()));
            } else {
                response.request_focus();
            }
        } else {
            let title = ui
                .add(
                    egui::Label::new(
                        RichText::new(&store.active_conversation().title)
                            .color(palette.text_primary)
                            .strong(),
                    )
                    .sense(egui::Sense::click()),
                )
                .on_hover_text("Click to rename");
            if title.clicked() {
                state.begin_title_edit(&store.active_conversation().title);
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("⚙").on_hover_text("Open settings").clicked() {
                *action = Some(ChatAction::OpenSettings);
            }
            // Notifications are not wired up
            let _ = ui.button("🔔");
        });
    });
}

fn render_message(
    ui: &mut egui::Ui,
    message: &Message,
    palette: &Palette,
    action: &mut Option<ChatAction>,
) {
    let (align, fill, text_color) = match message.role {
        Role::User => (Align::Max, palette.accent, palette.on_accent),
        Role::Assistant => (Align::Min, palette.bg_secondary, palette.text_primary),
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        ui.set_max_width(ui.available_width() * 0.85);
        egui::Frame::default()
            .fill(fill)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&message.content).color(text_color));
                ui.horizontal(|ui| {
                    if ui.small_button("Copy").clicked() {
                        *action = Some(ChatAction::Copy(message.content.clone()));
                    }
                    if ui.small_button("Regenerate").clicked() {
                        *action = Some(ChatAction::Stub("Regenerating response..."));
                    }
                    if ui.small_button("Edit").clicked() {
                        *action = Some(ChatAction::Stub("Edit mode coming soon"));
                    }
                });
            });
    });
}

fn render_typing_indicator(ui: &mut egui::Ui, palette: &Palette) {
    egui::Frame::default()
        .fill(palette.bg_secondary)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            let phase = (ui.input(|i| i.time) * 3.0) as usize % 3 + 1;
            ui.label(RichText::new("●".repeat(phase)).color(palette.text_secondary));
        });
    ui.ctx().request_repaint();
}

fn render_input_row(
    ui: &mut egui::Ui,
    store: &SessionStore,
    state: &mut UiState,
    palette: &Palette,
    action: &mut Option<ChatAction>,
) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("model_picker")
            .selected_text(store.model().label())
            .show_ui(ui, |ui| {
                for model in ChatModel::all() {
                    let row = ui.selectable_label(
                        store.model() == *model,
                        format!("{}  ({})", model.label(), model.tagline()),
                    );
                    if row.clicked() {
                        *action = Some(ChatAction::SetModel(*model));
                    }
                }
            });

        let reserved = 170.0;
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.input_text)
                .hint_text("Type a message...")
                .desired_width(ui.available_width() - reserved),
        );

        if ui.button("📎").on_hover_text("Attach file").clicked() {
            *action = Some(ChatAction::Stub("File uploads coming soon"));
        }
        if ui.button("🎤").on_hover_text("Voice input").clicked() {
            *action = Some(ChatAction::Stub("Voice input coming soon"));
        }

        let can_send = !state.input_text.trim().is_empty();
        let send = ui.add_enabled(
            can_send,
            egui::Button::new(RichText::new("Send").color(palette.on_accent))
                .fill(if can_send { palette.accent } else { palette.bg_surface })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(56.0, 0.0)),
        );

        if (response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) && can_send)
            || send.clicked()
        {
            *action = Some(ChatAction::Send(std::mem::take(&mut state.input_text)));
            response.request_focus();
        }
    });
}
