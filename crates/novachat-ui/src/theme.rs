//! Theme palettes — the five named themes and how they map onto egui
//! visuals. The selected theme is persisted via `Settings`; re-applying
//! on load and on every change keeps the whole context in sync.

use egui::{Color32, CornerRadius, Stroke, Vec2};
use novachat_types::settings::ThemeChoice;

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Colors for one theme.
pub struct Palette {
    pub dark_mode: bool,
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_surface: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    /// Text color on accent-filled surfaces (user bubbles, primary buttons)
    pub on_accent: Color32,
}

pub const LIGHT: Palette = Palette {
    dark_mode: false,
    bg_primary: Color32::from_rgb(250, 250, 250),
    bg_secondary: Color32::from_rgb(241, 241, 244),
    bg_surface: Color32::from_rgb(228, 228, 231),
    text_primary: Color32::from_rgb(24, 24, 27),
    text_secondary: Color32::from_rgb(113, 113, 122),
    accent: Color32::from_rgb(99, 102, 241),
    on_accent: Color32::from_rgb(250, 250, 250),
};

pub const DARK: Palette = Palette {
    dark_mode: true,
    bg_primary: Color32::from_rgb(24, 24, 27),
    bg_secondary: Color32::from_rgb(39, 39, 42),
    bg_surface: Color32::from_rgb(52, 52, 56),
    text_primary: Color32::from_rgb(228, 228, 231),
    text_secondary: Color32::from_rgb(161, 161, 170),
    accent: Color32::from_rgb(99, 102, 241),
    on_accent: Color32::from_rgb(250, 250, 250),
};

pub const OCEAN: Palette = Palette {
    dark_mode: true,
    bg_primary: Color32::from_rgb(13, 27, 42),
    bg_secondary: Color32::from_rgb(23, 37, 56),
    bg_surface: Color32::from_rgb(32, 49, 71),
    text_primary: Color32::from_rgb(224, 234, 244),
    text_secondary: Color32::from_rgb(136, 160, 184),
    accent: Color32::from_rgb(56, 152, 236),
    on_accent: Color32::from_rgb(240, 247, 255),
};

pub const FOREST: Palette = Palette {
    dark_mode: true,
    bg_primary: Color32::from_rgb(16, 26, 19),
    bg_secondary: Color32::from_rgb(24, 36, 27),
    bg_surface: Color32::from_rgb(33, 48, 37),
    text_primary: Color32::from_rgb(226, 238, 228),
    text_secondary: Color32::from_rgb(140, 162, 146),
    accent: Color32::from_rgb(52, 168, 83),
    on_accent: Color32::from_rgb(240, 250, 242),
};

pub const SUNSET: Palette = Palette {
    dark_mode: true,
    bg_primary: Color32::from_rgb(26, 18, 33),
    bg_secondary: Color32::from_rgb(37, 26, 46),
    bg_surface: Color32::from_rgb(50, 36, 62),
    text_primary: Color32::from_rgb(238, 228, 244),
    text_secondary: Color32::from_rgb(168, 146, 184),
    accent: Color32::from_rgb(168, 85, 247),
    on_accent: Color32::from_rgb(248, 242, 252),
};

pub fn palette(theme: ThemeChoice) -> &'static Palette {
    match theme {
        ThemeChoice::Light => &LIGHT,
        ThemeChoice::Dark => &DARK,
        ThemeChoice::Ocean => &OCEAN,
        ThemeChoice::Forest => &FOREST,
        ThemeChoice::Sunset => &SUNSET,
    }
}

/// Apply a theme to an egui context.
pub fn apply_theme(ctx: &egui::Context, theme: ThemeChoice) {
    let p = palette(theme);
    let mut style = (*ctx.style()).clone();

    style.visuals = if p.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    style.visuals.panel_fill = p.bg_primary;
    style.visuals.window_fill = p.bg_secondary;
    style.visuals.extreme_bg_color = p.bg_secondary;

    style.visuals.widgets.inactive.bg_fill = p.bg_surface;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    style.visuals.widgets.hovered.bg_fill = p.bg_surface;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    style.visuals.widgets.active.bg_fill = p.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, p.on_accent);

    style.visuals.selection.bg_fill = p.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, p.accent);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
