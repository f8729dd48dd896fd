use serde::{Deserialize, Serialize};

/// Storage key for the selected theme (kept from the original site).
pub const THEME_KEY: &str = "novachat-theme";
/// Storage key for the sidebar visibility flag, stored as "true"/"false".
pub const SIDEBAR_KEY: &str = "sidebarOpen";

/// One of the named UI themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
    Ocean,
    Forest,
    Sunset,
}

impl ThemeChoice {
    pub fn all() -> &'static [ThemeChoice] {
        &[
            ThemeChoice::Light,
            ThemeChoice::Dark,
            ThemeChoice::Ocean,
            ThemeChoice::Forest,
            ThemeChoice::Sunset,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::Ocean => "Ocean Blue",
            ThemeChoice::Forest => "Forest Green",
            ThemeChoice::Sunset => "Sunset Purple",
        }
    }

    /// Wire value as stored under [`THEME_KEY`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
            ThemeChoice::Ocean => "ocean",
            ThemeChoice::Forest => "forest",
            ThemeChoice::Sunset => "sunset",
        }
    }

    /// Parse a stored wire value. Unrecognized values yield `None` so the
    /// caller can fall back to the default instead of applying them as-is.
    pub fn parse(raw: &str) -> Option<Self> {
        ThemeChoice::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str() == raw)
    }
}

impl Default for ThemeChoice {
    fn default() -> Self {
        ThemeChoice::Light
    }
}

/// The full set of client-side persisted preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub sidebar_open: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            sidebar_open: true,
        }
    }
}
