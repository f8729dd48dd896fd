//! Sidebar — New chat, conversation search and filter chips, and the
//! conversation list.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use novachat_core::store::SessionStore;
use novachat_types::conversation::ConversationId;

use crate::state::{HistoryFilter, UiState};
use crate::theme::{Palette, PANEL_ROUNDING};

/// What the caller should do after rendering the sidebar.
pub enum SidebarAction {
    NewChat,
    Select(ConversationId),
}

/// Render the sidebar. Returns an action when the user clicked something
/// that mutates the session store.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    store: &SessionStore,
    state: &mut UiState,
    palette: &Palette,
) -> Option<SidebarAction> {
    let mut action = None;

    let new_chat = ui.add(
        egui::Button::new(RichText::new("+ New chat").color(palette.on_accent).strong())
            .fill(palette.accent)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), 30.0)),
    );
    if new_chat.clicked() {
        action = Some(SidebarAction::NewChat);
    }

    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.search_text)
            .hint_text("Search conversations...")
            .desired_width(f32::INFINITY),
    );

    ui.horizontal_wrapped(|ui| {
        for filter in HistoryFilter::all() {
            if ui
                .selectable_label(state.filter == *filter, RichText::new(filter.label()).small())
                .clicked()
            {
                state.filter = *filter;
            }
        }
    });

    ui.separator();

    let footer_height = 48.0;
    ScrollArea::vertical()
        .max_height(ui.available_height() - footer_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for conversation in store.filtered_conversations(&state.search_text) {
                let selected = conversation.id == store.active_id();
                ui.horizontal(|ui| {
                    let title = ui.selectable_label(
                        selected,
                        RichText::new(&conversation.title).color(palette.text_primary),
                    );
                    if title.clicked() {
                        action = Some(SidebarAction::Select(conversation.id));
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // Star, archive, and delete are not wired up yet
                        let _ = ui.small_button("🗑");
                        let _ = ui.small_button("📁");
                        let _ = ui.small_button("☆");
                    });
                });
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label(RichText::new("Plan: Plus").color(palette.text_secondary).small());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new("1,247 msgs left")
                    .color(palette.text_secondary)
                    .small(),
            );
        });
    });

    action
}
