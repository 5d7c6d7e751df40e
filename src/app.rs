//! Catalog Studio Frontend App
//!
//! Root component: owns the store, the page switch and the two loaders
//! (catalog list, items of the selected catalog).

use catalog_core::{browser, CatalogBrowser};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::debug;

use crate::commands;
use crate::components::{AuthForm, AuthMode, CatalogPage, EditCatalogPage, NewCatalogPage, NewItemPage, ToastViewport};
use crate::context::{AppContext, Page};
use crate::storage::LocalStorageSession;
use crate::store::{store_clear_items, AppState, AppStateStoreFields};
use crate::toast::Toasts;

/// Query parameter naming the catalog to open first
const CATALOG_QUERY_PARAM: &str = "catalogId";

#[component]
pub fn App() -> impl IntoView {
    let preferred = commands::query_param(CATALOG_QUERY_PARAM);
    let store = Store::new(AppState { browser: CatalogBrowser::new(preferred), ..AppState::default() });
    provide_context(store);

    let ctx = AppContext::new(signal(Page::default()), signal(0u32), signal(0u32), Toasts::new());
    provide_context(ctx);

    // Load catalogs on mount and whenever a reload is requested
    Effect::new(move |_| {
        let _ = ctx.catalogs_trigger.get();
        spawn_local(async move {
            let fetched = match commands::api() {
                Ok(api) => CatalogBrowser::fetch(&api, &LocalStorageSession).await,
                Err(err) => Err(err),
            };
            store.browser().write().apply(fetched, None, &LocalStorageSession);
        });
    });

    let selected_id = Memo::new(move |_| store.browser().read().selected_catalog_id().map(str::to_string));

    // A different catalog invalidates the list, the edit and the drag
    Effect::new(move |previous: Option<Option<String>>| {
        let current = selected_id.get();
        if previous.is_some_and(|previous| previous != current) {
            store_clear_items(&store);
        }
        current
    });

    // Load items when the selection or trigger changes
    Effect::new(move |_| {
        let trigger = ctx.items_trigger.get();
        let catalog_id = selected_id.get();
        debug!(catalog_id = ?catalog_id, trigger, "loading items");
        store.items_loading().set(true);

        spawn_local(async move {
            let loaded = match commands::api() {
                Ok(api) => browser::load_items(&api, &LocalStorageSession, catalog_id.as_deref()).await,
                Err(err) => Err(err),
            };
            // A newer selection owns the list now
            if selected_id.get_untracked() != catalog_id {
                return;
            }
            store.items_loading().set(false);
            match loaded {
                Ok(items) => {
                    store.items().set(items);
                    store.items_error().set(None);
                }
                Err(err) => {
                    store.items().set(Vec::new());
                    store.items_error().set(Some(browser::load_error_message(&err)));
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            {move || match ctx.page.get() {
                Page::Catalogs => view! { <CatalogPage /> }.into_any(),
                Page::Login => view! { <AuthForm mode=AuthMode::Login /> }.into_any(),
                Page::Register => view! { <AuthForm mode=AuthMode::Register /> }.into_any(),
                Page::NewCatalog => view! { <NewCatalogPage /> }.into_any(),
                Page::EditCatalog(catalog_id) => view! { <EditCatalogPage catalog_id=catalog_id /> }.into_any(),
                Page::NewItem => view! { <NewItemPage /> }.into_any(),
            }}
            <ToastViewport />
        </div>
    }
}
