//! Best-effort clipboard writes.
//!
//! `navigator.clipboard.writeText` returns a promise; we drop it without
//! awaiting. A rejected write (no permission, no focus) is unobservable,
//! matching the product behavior.

/// Copy `text` to the system clipboard, fire-and-forget.
pub fn copy_text(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.navigator().clipboard().write_text(text);
}
