//! localStorage storage backend.
//! Persistent across page reloads; the browser may refuse access in
//! private-browsing or sandboxed contexts, in which case `open` fails and
//! the caller falls back to memory.

use async_trait::async_trait;
use web_sys::Storage;

use novachat_core::ports::StoragePort;
use novachat_types::{ChatError, Result};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Grab `window.localStorage`, failing if the browser denies access.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let length = self
            .storage
            .length()
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?;
        let mut keys = Vec::new();
        for i in 0..length {
            let key = self
                .storage
                .key(i)
                .map_err(|e| ChatError::Storage(format!("{:?}", e)))?;
            if let Some(key) = key {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
