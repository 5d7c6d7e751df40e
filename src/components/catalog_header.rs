//! Catalog Header Component
//!
//! Catalog picker, layout switch and the catalog-level actions.

use catalog_core::ViewMode;
use leptos::prelude::*;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, Page};
use crate::storage::LocalStorageSession;
use crate::store::{store_clear_items, use_app_store, AppStateStoreFields};

#[component]
pub fn CatalogHeader(#[prop(into)] on_export: Callback<()>, exporting: Signal<bool>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let has_catalogs = move || store.browser().read().has_catalogs();
    let has_selection = move || store.browser().read().selected_catalog().is_some();
    let selected_id = move || store.browser().read().selected_catalog_id().unwrap_or_default().to_string();
    let signed_in = move || store.browser().read().has_token() == Some(true);

    let on_select = move |ev: web_sys::Event| {
        let id = event_target_value(&ev);
        if id.is_empty() {
            return;
        }
        store.browser().write().select(Some(id), &LocalStorageSession);
    };

    let logout = move |_| {
        store.browser().write().logout(&LocalStorageSession);
        store_clear_items(&store);
        ctx.navigate(Page::Login);
    };

    view! {
        <header class="catalog-header">
            <div class="header-row">
                <h1 class="app-title">"Catalog Studio"</h1>
                <Show
                    when=signed_in
                    fallback=move || view! {
                        <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Login)>"Sign in"</button>
                    }
                >
                    <button class="secondary-btn" on:click=move |_| ctx.navigate(Page::NewCatalog)>"New catalog"</button>
                    <button
                        class="secondary-btn"
                        disabled=move || !has_selection()
                        on:click=move |_| {
                            if let Some(id) = store.browser().read_untracked().selected_catalog_id() {
                                ctx.navigate(Page::EditCatalog(id.to_string()));
                            }
                        }
                    >
                        "Edit catalog"
                    </button>
                    <button
                        class="secondary-btn"
                        disabled=move || !has_selection()
                        on:click=move |_| ctx.navigate(Page::NewItem)
                    >
                        "New item"
                    </button>
                    <button class="secondary-btn" on:click=logout>"Log out"</button>
                </Show>
            </div>

            <div class="header-row">
                <DeleteConfirmButton
                    button_class="danger-btn"
                    label="🗑"
                    subject=Signal::derive(move || {
                        store
                            .browser()
                            .read()
                            .selected_catalog()
                            .map(|catalog| format!("\"{}\"", catalog.title))
                            .unwrap_or_else(|| "this catalog".to_string())
                    })
                    disabled=Signal::derive(move || !has_selection() || store.edit().read().is_saving())
                    on_confirm=Callback::new(move |_| actions::delete_catalog(store, ctx))
                />
                <select class="catalog-select" disabled=move || !has_catalogs() on:change=on_select>
                    <Show when=has_catalogs fallback=|| view! { <option value="" disabled=true>"No catalogs"</option> }>
                        <option value="" disabled=true>"Pick a catalog"</option>
                        <For
                            each=move || store.browser().read().catalogs().to_vec()
                            key=|catalog| (catalog.id.clone(), catalog.title.clone())
                            let:catalog
                        >
                            <option
                                value=catalog.id.clone()
                                selected={
                                    let id = catalog.id.clone();
                                    move || selected_id() == id
                                }
                            >
                                {catalog.title.clone()}
                            </option>
                        </For>
                    </Show>
                </select>

                <div class="view-switch">
                    {ViewMode::ALL
                        .into_iter()
                        .map(|mode| {
                            let is_active = move || store.view_mode().get() == mode;
                            view! {
                                <button
                                    class=move || if is_active() { "view-btn active" } else { "view-btn" }
                                    on:click=move |_| store.view_mode().set(mode)
                                >
                                    {mode.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="primary-btn"
                    disabled=move || exporting.get() || !has_selection()
                    on:click=move |_| on_export.run(())
                >
                    {move || if exporting.get() { "Exporting..." } else { "Export PDF" }}
                </button>
            </div>
        </header>
    }
}
