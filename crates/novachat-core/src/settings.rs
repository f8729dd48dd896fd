//! Explicit load / validate / save steps for the persisted settings
//! record. Stored values are validated against the known enums; anything
//! absent or unrecognized falls back to the default instead of being
//! applied verbatim.

use novachat_types::settings::{Settings, ThemeChoice, SIDEBAR_KEY, THEME_KEY};
use novachat_types::Result;

use crate::ports::StoragePort;

/// Load settings from storage. Never fails: unreadable or invalid values
/// degrade to the defaults.
pub async fn load_settings(storage: &dyn StoragePort) -> Settings {
    let defaults = Settings::default();

    let theme = match read_key(storage, THEME_KEY).await {
        Some(raw) => ThemeChoice::parse(&raw).unwrap_or_else(|| {
            log::warn!("Ignoring unrecognized stored theme {:?}", raw);
            defaults.theme
        }),
        None => defaults.theme,
    };

    let sidebar_open = match read_key(storage, SIDEBAR_KEY).await.as_deref() {
        Some("true") => true,
        Some("false") => false,
        Some(raw) => {
            log::warn!("Ignoring unrecognized stored sidebar flag {:?}", raw);
            defaults.sidebar_open
        }
        None => defaults.sidebar_open,
    };

    Settings { theme, sidebar_open }
}

/// Persist settings under the fixed keys shared with the original site.
pub async fn save_settings(storage: &dyn StoragePort, settings: &Settings) -> Result<()> {
    storage.set(THEME_KEY, settings.theme.as_str()).await?;
    storage
        .set(SIDEBAR_KEY, if settings.sidebar_open { "true" } else { "false" })
        .await
}

async fn read_key(storage: &dyn StoragePort, key: &str) -> Option<String> {
    match storage.get(key).await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to read {:?} from storage: {}", key, e);
            None
        }
    }
}
