//! Presentational marketing pages. No state of their own; buttons surface
//! navigation intents for the app layer to act on.

pub mod dashboard;
pub mod home;
pub mod pricing;

use egui::{self, RichText};

use crate::theme::Palette;

/// Navigation intent raised by a page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    OpenChat,
    OpenPricing,
}

/// Shared site footer.
pub fn footer(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(24.0);
    ui.separator();
    ui.columns(3, |cols| {
        cols[0].label(RichText::new("NovaChat AI").strong().color(palette.text_primary));
        cols[0].label(
            RichText::new(
                "Your AI assistant for everything. Chat, analyze, and create \
                 with a modern conversational platform.",
            )
            .color(palette.text_secondary)
            .small(),
        );

        cols[1].label(RichText::new("Product").strong().color(palette.text_primary));
        for item in ["Features", "Pricing", "Chat"] {
            cols[1].label(RichText::new(item).color(palette.text_secondary).small());
        }

        cols[2].label(RichText::new("Company").strong().color(palette.text_primary));
        for item in ["Security", "Privacy", "Status"] {
            cols[2].label(RichText::new(item).color(palette.text_secondary).small());
        }
    });
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("© 2025 NovaChat Inc. All rights reserved.")
                .color(palette.text_secondary)
                .small(),
        );
    });
}
