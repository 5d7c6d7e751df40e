//! Local Storage Session
//!
//! `SessionStore` backed by `window.localStorage`. Storage failures (private
//! mode, quota) are logged and treated as missing values.

use catalog_core::SessionStore;
use tracing::warn;

#[derive(Clone, Copy, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            warn!(key, "local storage unavailable");
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!(key, "could not write local storage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
