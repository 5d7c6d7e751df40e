//! Item List Actions
//!
//! Glue between the item rows and the core state machines in the store.
//! Every network call runs in `spawn_local`; state changes go through the
//! store so all three layouts stay in sync.

use catalog_core::browser;
use catalog_core::{CatalogApi, DragReorderCoordinator, EditField, EditTarget, KeepOptimistic, Notification, Notifier};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::commands;
use crate::context::AppContext;
use crate::storage::LocalStorageSession;
use crate::store::{
    store_apply_patch, store_clear_items, store_remove_item, store_selected_catalog_id, AppStateStoreFields,
    AppStore,
};

fn report_client_error(ctx: &AppContext, err: &catalog_core::CatalogError) {
    ctx.toasts.notify(Notification::from_error("Client error", err));
}

// ========================
// Inline edit
// ========================

pub fn start_edit(store: AppStore, target: EditTarget) {
    store.edit().write().start_edit(&target);
}

pub fn change_edit(store: AppStore, field: EditField, value: String) {
    store.edit().write().change_edit(field, value);
}

pub fn cancel_edit(store: AppStore) {
    store.edit().write().cancel_edit();
}

pub fn save_edit(store: AppStore, ctx: AppContext) {
    let catalog_id = store_selected_catalog_id(&store);
    let session = LocalStorageSession;
    let begun = store.edit().write().begin_save(catalog_id.as_deref(), &session, &ctx.toasts);
    let Ok(Some(pending)) = begun else {
        return;
    };

    spawn_local(async move {
        let result = match commands::api() {
            Ok(api) => api.update_item(&pending.token, &pending.item_uuid, &pending.request).await,
            Err(err) => Err(err),
        };
        let finished = store.edit().write().finish_save(&pending, result, &ctx.toasts);
        if let Ok(patch) = finished {
            store_apply_patch(&store, &pending.item_uuid, &patch);
        }
    });
}

// ========================
// Drag reorder
// ========================

fn editing_uuid(store: &AppStore) -> Option<String> {
    store.edit().read_untracked().editing_item_uuid().map(str::to_string)
}

pub fn drag_start(store: AppStore, item_uuid: String) -> bool {
    let editing = editing_uuid(&store);
    store.drag().write().drag_start(&item_uuid, editing.as_deref())
}

pub fn drag_enter(store: AppStore, item_uuid: String) {
    store.drag().write().drag_enter(&item_uuid);
}

pub fn drag_leave(store: AppStore) {
    store.drag().write().drag_leave();
}

pub fn drag_end(store: AppStore) {
    store.drag().write().drag_end();
}

/// Callbacks every item row wires into its drag and edit controls
#[derive(Clone, Copy)]
pub struct RowCallbacks {
    pub drag_start: Callback<String, bool>,
    pub drag_enter: Callback<String>,
    pub drag_leave: Callback<()>,
    pub drag_end: Callback<()>,
    pub drop: Callback<String>,
    pub start_edit: Callback<EditTarget>,
    pub change_edit: Callback<(EditField, String)>,
    pub save_edit: Callback<()>,
    pub cancel_edit: Callback<()>,
    pub delete: Callback<String>,
}

impl RowCallbacks {
    pub fn new(store: AppStore, ctx: AppContext) -> Self {
        Self {
            drag_start: Callback::new(move |uuid| drag_start(store, uuid)),
            drag_enter: Callback::new(move |uuid| drag_enter(store, uuid)),
            drag_leave: Callback::new(move |_| drag_leave(store)),
            drag_end: Callback::new(move |_| drag_end(store)),
            drop: Callback::new(move |uuid| drop_on(store, ctx, uuid)),
            start_edit: Callback::new(move |target| start_edit(store, target)),
            change_edit: Callback::new(move |(field, value)| change_edit(store, field, value)),
            save_edit: Callback::new(move |_| save_edit(store, ctx)),
            cancel_edit: Callback::new(move |_| cancel_edit(store)),
            delete: Callback::new(move |uuid| delete_item(store, ctx, uuid)),
        }
    }
}

/// Apply the drop locally, then persist the new position
pub fn drop_on(store: AppStore, ctx: AppContext, target_uuid: String) {
    let editing = editing_uuid(&store);
    // One store guard at a time: the list is edited on a copy
    let mut items = store.items().get_untracked();
    let pending = store.drag().write().drop(&target_uuid, &mut items, editing.as_deref());
    let Some(pending) = pending else {
        return;
    };
    store.items().set(items);

    let catalog_id = store_selected_catalog_id(&store);
    let persist =
        DragReorderCoordinator::<KeepOptimistic>::persist_request(&pending, &LocalStorageSession, catalog_id.as_deref());
    let Some((token, request)) = persist else {
        debug!(item_uuid = %pending.item_uuid, "reorder kept locally: no session or catalog");
        return;
    };

    spawn_local(async move {
        let result = match commands::api() {
            Ok(api) => api.set_item_position(&token, &pending.item_uuid, &request).await,
            Err(err) => Err(err),
        };
        let coordinator = store.drag().get_untracked();
        let mut items = store.items().get_untracked();
        coordinator.reconcile(&pending, result, &mut items, &ctx.toasts);
        store.items().set(items);
    });
}

// ========================
// Deletes
// ========================

pub fn delete_item(store: AppStore, ctx: AppContext, item_uuid: String) {
    if !store.edit().write().release_for_delete(&item_uuid) {
        return;
    }
    let catalog_id = store_selected_catalog_id(&store);
    spawn_local(async move {
        let api = match commands::api() {
            Ok(api) => api,
            Err(err) => return report_client_error(&ctx, &err),
        };
        let deleted =
            browser::delete_item(&api, &LocalStorageSession, catalog_id.as_deref(), &item_uuid, &ctx.toasts).await;
        if deleted.is_ok() {
            store_remove_item(&store, &item_uuid);
            ctx.reload_items();
        }
    });
}

pub fn delete_catalog(store: AppStore, ctx: AppContext) {
    if store.edit().read_untracked().is_saving() {
        debug!("catalog delete refused: item save in flight");
        return;
    }
    let catalog_id = store_selected_catalog_id(&store);
    spawn_local(async move {
        let api = match commands::api() {
            Ok(api) => api,
            Err(err) => return report_client_error(&ctx, &err),
        };
        let deleted = browser::delete_catalog(&api, &LocalStorageSession, catalog_id.as_deref(), &ctx.toasts).await;
        if deleted.is_ok() {
            store.browser().write().select(None, &LocalStorageSession);
            store_clear_items(&store);
            ctx.reload_catalogs();
        }
    });
}
