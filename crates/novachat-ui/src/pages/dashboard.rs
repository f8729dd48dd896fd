//! Dashboard stub — account management is not built yet.

use egui::{self, RichText};

use crate::pages::footer;
use crate::theme::Palette;

pub fn dashboard_page(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(32.0);
    ui.label(
        RichText::new("Dashboard")
            .color(palette.text_primary)
            .strong()
            .size(28.0),
    );
    ui.label(
        RichText::new(
            "Sign-in is not yet configured. Account, billing, and preferences \
             will appear here once authentication is connected.",
        )
        .color(palette.text_secondary),
    );
    footer(ui, palette);
}
