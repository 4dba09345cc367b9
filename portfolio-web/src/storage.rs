use portfolio_core::{KeyValueStore, StoreError};
use web_sys::Storage;

use crate::dom;

/// `localStorage` or `sessionStorage` behind the core store trait.
///
/// Storage can be missing (private mode, blocked cookies); reads then return
/// nothing and writes report [`StoreError::Unavailable`].
#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn local() -> Self {
        Self {
            storage: dom::window().and_then(|win| win.local_storage().ok().flatten()),
        }
    }

    #[must_use]
    pub fn session() -> Self {
        Self {
            storage: dom::window().and_then(|win| win.session_storage().ok().flatten()),
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
