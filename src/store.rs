//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use catalog_core::{CatalogBrowser, DragReorderCoordinator, ItemDetail, ItemEditSession, ItemPatch, ViewMode};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog list and selection
    pub browser: CatalogBrowser,
    /// Items of the selected catalog, in display order
    pub items: Vec<ItemDetail>,
    pub items_loading: bool,
    pub items_error: Option<String>,
    pub view_mode: ViewMode,
    /// Inline edit state of the item list
    pub edit: ItemEditSession,
    /// Drag state of the item list
    pub drag: DragReorderCoordinator,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_selected_catalog_id(store: &AppStore) -> Option<String> {
    store.browser().read_untracked().selected_catalog_id().map(str::to_string)
}

/// Merge a confirmed save into the item list
pub fn store_apply_patch(store: &AppStore, item_uuid: &str, patch: &ItemPatch) {
    if let Some(item) = store.items().write().iter_mut().find(|item| item.key() == item_uuid) {
        item.apply_patch(patch);
    }
}

/// Remove an item from the store by key
pub fn store_remove_item(store: &AppStore, item_uuid: &str) {
    store.items().write().retain(|item| item.key() != item_uuid);
}

/// Drop items and edit state when the catalog changes
pub fn store_clear_items(store: &AppStore) {
    store.items().set(Vec::new());
    store.items_error().set(None);
    store.edit().write().cancel_edit();
    store.drag().write().drag_end();
}
