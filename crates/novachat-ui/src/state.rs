//! Transient UI state that drives rendering.
//! Nothing here survives a reload; the durable flags (theme, sidebar
//! visibility) live in `Settings` and go through the storage port.

/// How long a notice stays on screen.
const NOTICE_SECS: f64 = 2.5;

/// Sidebar history filter chips. Selectable, but conversations carry no
/// timestamps, so the chips do not narrow the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Today,
    Yesterday,
    LastWeek,
    Archived,
}

impl HistoryFilter {
    pub fn all() -> &'static [HistoryFilter] {
        &[
            HistoryFilter::All,
            HistoryFilter::Today,
            HistoryFilter::Yesterday,
            HistoryFilter::LastWeek,
            HistoryFilter::Archived,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            HistoryFilter::All => "All",
            HistoryFilter::Today => "Today",
            HistoryFilter::Yesterday => "Yesterday",
            HistoryFilter::LastWeek => "Last Week",
            HistoryFilter::Archived => "Archived",
        }
    }
}

struct Notice {
    text: String,
    expires_at: f64,
}

/// State visible to UI panels
pub struct UiState {
    /// Message input buffer
    pub input_text: String,
    /// Sidebar search text
    pub search_text: String,
    /// Selected history filter chip
    pub filter: HistoryFilter,
    /// Whether the header title is being edited inline
    pub editing_title: bool,
    /// Edit buffer for the inline rename
    pub title_input: String,
    /// Whether the settings dialog is open
    pub show_settings: bool,
    /// Stub toggles shown in the settings dialog
    pub autosave_enabled: bool,
    pub sound_enabled: bool,
    notice: Option<Notice>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            search_text: String::new(),
            filter: HistoryFilter::All,
            editing_title: false,
            title_input: String::new(),
            show_settings: false,
            autosave_enabled: true,
            sound_enabled: false,
            notice: None,
        }
    }

    /// Start editing the active conversation title.
    pub fn begin_title_edit(&mut self, current_title: &str) {
        self.editing_title = true;
        self.title_input = current_title.to_string();
    }

    /// Discard the edit buffer without renaming.
    pub fn cancel_title_edit(&mut self) {
        self.editing_title = false;
        self.title_input.clear();
    }

    /// Finish editing and hand the buffer to the caller. The store treats
    /// an empty result as "keep the previous title".
    pub fn take_title_edit(&mut self) -> String {
        self.editing_title = false;
        std::mem::take(&mut self.title_input)
    }

    /// Show a transient one-line notice (the stand-in for toasts).
    pub fn set_notice(&mut self, text: impl Into<String>, now: f64) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: now + NOTICE_SECS,
        });
    }

    /// The notice to display at `now`, if it has not expired.
    pub fn notice(&self, now: f64) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| n.expires_at > now)
            .map(|n| n.text.as_str())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
