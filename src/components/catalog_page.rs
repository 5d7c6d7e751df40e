//! Catalog Page Component
//!
//! Main screen: header, status messages, the active layout and the
//! off-screen print copy used by the PDF export.

use catalog_core::domain::{map_items_to_products, DEFAULT_BACKGROUND_COLOR};
use catalog_core::{pdf, Catalog, Notification, Notifier, PdfSource, Product, ViewMode};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::actions::RowCallbacks;
use crate::commands;
use crate::components::{
    CardsView, CatalogEmptyState, CatalogHeader, ChecklistView, ItemsEmptyState, LoginEmptyState, PdfPreview,
    TableView,
};
use crate::context::use_app_context;
use crate::storage::LocalStorageSession;
use crate::store::{use_app_store, AppStateStoreFields};

const PDF_MIME: &str = "application/pdf";

#[component]
pub fn CatalogPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    provide_context(RowCallbacks::new(store, ctx));

    let products = Memo::new(move |_| map_items_to_products(&store.items().read()));
    let products: Signal<Vec<Product>> = products.into();
    let view_mode: Signal<ViewMode> = Signal::derive(move || store.view_mode().get());
    let selected = move || store.browser().read().selected_catalog().cloned();
    let business_name = Signal::derive(move || selected().map(|catalog| catalog.title).unwrap_or_default());
    let component_color = Signal::derive(move || {
        selected()
            .map(|catalog| catalog.component_color_or_default())
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string())
    });
    let page_style = move || {
        selected()
            .and_then(|catalog| catalog.page_background())
            .map(|color| format!("background-color: {color};"))
            .unwrap_or_default()
    };

    let has_token = move || store.browser().read().has_token();
    let catalogs_error = move || store.browser().read().error().map(str::to_string);
    let items_loading = move || store.items_loading().get();
    let items_empty = move || products.with(Vec::is_empty);
    let show_items_empty = move || {
        catalogs_error().is_none() && !items_loading() && items_empty() && selected().is_some()
    };

    let (exporting, set_exporting) = signal(false);
    let pdf_ref = NodeRef::<Div>::new();

    let on_export = Callback::new(move |_| {
        let Some(node) = pdf_ref.get_untracked() else {
            return;
        };
        let catalog = store.browser().read_untracked().selected_catalog().cloned();
        let catalog_id = catalog.as_ref().map(|catalog| catalog.id.clone());
        let source = PdfSource {
            html_content: node.inner_html(),
            styles: commands::page_styles(),
            base_href: commands::origin(),
            page_background: catalog.as_ref().and_then(Catalog::page_background).or_else(commands::body_background),
            component_background: component_color.get_untracked(),
            view_mode: store.view_mode().get_untracked(),
        };

        set_exporting.set(true);
        spawn_local(async move {
            let result = match commands::api() {
                Ok(api) => pdf::export_pdf(&api, &LocalStorageSession, catalog_id.as_deref(), &source, &ctx.toasts).await,
                Err(err) => {
                    ctx.toasts.notify(Notification::from_error("Could not export", &err));
                    Err(err)
                }
            };
            set_exporting.set(false);
            if let Ok(download) = result {
                if let Err(err) = commands::save_bytes(&download.bytes, &download.file_name, PDF_MIME) {
                    warn!(error = %err, "pdf download failed");
                    ctx.toasts.notify(Notification::error("Could not export", err));
                }
            }
        });
    });

    view! {
        <div class="catalog-page" style=page_style>
            <CatalogHeader on_export=on_export exporting=exporting.into() />

            <main class="catalog-main">
                {move || catalogs_error().map(|message| view! { <p class="form-error">{message}</p> })}
                {move || {
                    store
                        .items_error()
                        .get()
                        .filter(|_| !show_items_empty())
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}

                {move || match has_token() {
                    None => view! { <p class="muted">"Loading catalogs..."</p> }.into_any(),
                    Some(false) => view! { <LoginEmptyState /> }.into_any(),
                    Some(true) if catalogs_error().is_none() && !store.browser().read().has_catalogs() => {
                        view! { <CatalogEmptyState /> }.into_any()
                    }
                    Some(true) => ().into_any(),
                }}

                <Show when=items_loading>
                    <p class="muted">"Loading items..."</p>
                </Show>
                <Show when=show_items_empty>
                    <ItemsEmptyState />
                </Show>
                <Show when=move || !items_loading() && !items_empty()>
                    {move || match view_mode.get() {
                        ViewMode::Cards => view! {
                            <CardsView products=products card_background=component_color />
                        }
                        .into_any(),
                        ViewMode::Checklist => view! {
                            <ChecklistView
                                products=products
                                business_name=business_name
                                container_background=component_color
                            />
                        }
                        .into_any(),
                        ViewMode::Table => view! {
                            <TableView products=products business_name=business_name background=component_color />
                        }
                        .into_any(),
                    }}
                </Show>

                <PdfPreview view_mode=view_mode products=products business_name=business_name node_ref=pdf_ref />
            </main>
        </div>
    }
}
