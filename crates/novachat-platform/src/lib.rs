//! Browser platform adapters for NovaChat.
//!
//! Implements the `novachat-core` storage port on top of localStorage
//! (with an in-memory fallback) and provides best-effort clipboard writes.

pub mod clipboard;
pub mod storage;
