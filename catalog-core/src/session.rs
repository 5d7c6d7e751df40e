//! Session Store
//!
//! Bearer token and last selected catalog. The browser keeps them in
//! local storage; everything in this crate only sees the trait.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key of the last selected catalog
pub const SELECTED_CATALOG_KEY: &str = "selectedCatalogId";

/// Key-value session storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Current token, empty strings count as missing
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    fn selected_catalog_id(&self) -> Option<String> {
        self.get(SELECTED_CATALOG_KEY).filter(|id| !id.is_empty())
    }

    fn set_selected_catalog_id(&self, catalog_id: &str) {
        self.set(SELECTED_CATALOG_KEY, catalog_id);
    }

    /// Logout: token and selection go together
    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(SELECTED_CATALOG_KEY);
    }
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
