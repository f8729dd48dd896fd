//! Pricing page and the shared pricing section.

use egui::{self, RichText, Vec2};

use crate::pages::{footer, PageAction};
use crate::theme::{Palette, PANEL_ROUNDING};

struct Tier {
    name: &'static str,
    price: &'static str,
    note: &'static str,
    cta: &'static str,
    popular: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Free",
        price: "$0",
        note: "20 messages/day",
        cta: "Get Started",
        popular: false,
    },
    Tier {
        name: "Plus",
        price: "$20",
        note: "Unlimited + premium models",
        cta: "Upgrade",
        popular: true,
    },
    Tier {
        name: "Pro",
        price: "$40",
        note: "API + team features",
        cta: "Go Pro",
        popular: false,
    },
];

pub fn pricing_page(ui: &mut egui::Ui, palette: &Palette) -> Option<PageAction> {
    ui.add_space(32.0);
    let action = pricing_section(ui, palette);
    footer(ui, palette);
    action
}

pub fn pricing_section(ui: &mut egui::Ui, palette: &Palette) -> Option<PageAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Simple, transparent pricing")
                .color(palette.text_primary)
                .strong()
                .size(24.0),
        );
        ui.label(
            RichText::new("Start free. Upgrade when you're ready, cancel anytime.")
                .color(palette.text_secondary),
        );
    });
    ui.add_space(16.0);

    ui.columns(TIERS.len(), |cols| {
        for (col, tier) in cols.iter_mut().zip(&TIERS) {
            egui::Frame::default()
                .fill(palette.bg_secondary)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(12.0)
                .stroke(if tier.popular {
                    egui::Stroke::new(2.0, palette.accent)
                } else {
                    egui::Stroke::NONE
                })
                .show(col, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(tier.name).color(palette.text_primary).strong());
                        if tier.popular {
                            ui.label(RichText::new("Popular").color(palette.accent).small());
                        }
                    });
                    ui.label(
                        RichText::new(format!("{}/mo", tier.price))
                            .color(palette.text_primary)
                            .strong()
                            .size(28.0),
                    );
                    ui.label(RichText::new(tier.note).color(palette.text_secondary).small());
                    ui.add_space(8.0);
                    let cta = ui.add(
                        egui::Button::new(RichText::new(tier.cta).color(if tier.popular {
                            palette.on_accent
                        } else {
                            palette.text_primary
                        }))
                        .fill(if tier.popular {
                            palette.accent
                        } else {
                            palette.bg_surface
                        })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(ui.available_width(), 28.0)),
                    );
                    if cta.clicked() {
                        action = Some(PageAction::OpenChat);
                    }
                });
        }
    });

    action
}
