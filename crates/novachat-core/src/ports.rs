//! Port traits — the hexagonal architecture boundary.
//!
//! The trait is defined here in `novachat-core` (pure Rust).
//! Implementations live in `novachat-platform` (browser adapters).
//! The core never imports platform code; it only depends on this trait.

use async_trait::async_trait;
use novachat_types::Result;

/// Durable string-keyed, string-valued client-side storage. The only
/// persisted state in the whole product is the theme name and the sidebar
/// visibility flag, so values stay plain strings.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// List keys with a given prefix
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
