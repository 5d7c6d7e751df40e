//! Catalog Form Components
//!
//! Create and edit screens for a catalog. Both share `CatalogFormPanel`;
//! the edit screen first resolves the catalog it was opened for.

use catalog_core::{CatalogApi, CatalogForm, FormMode, Notification, Notifier, SessionStore};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::commands;
use crate::components::drop_zone::load_image;
use crate::components::FileDropZone;
use crate::context::{use_app_context, Page};
use crate::storage::LocalStorageSession;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewCatalogPage() -> impl IntoView {
    view! { <CatalogFormPanel form=CatalogForm::create() /> }
}

/// Edit screen; uses the cached catalog when the list has it
#[component]
pub fn EditCatalogPage(catalog_id: String) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let cached = store.browser().read_untracked().catalogs().iter().find(|c| c.id == catalog_id).cloned();
    let form = RwSignal::new(cached.as_ref().map(CatalogForm::edit));

    if cached.is_none() {
        spawn_local(async move {
            let Some(token) = LocalStorageSession.token() else {
                ctx.toasts.notify(Notification::error("No session", "Sign in to edit a catalog."));
                return;
            };
            let fetched = match commands::api() {
                Ok(api) => api.get_catalog(&token, &catalog_id).await,
                Err(err) => Err(err),
            };
            match fetched {
                Ok(catalog) => form.set(Some(CatalogForm::edit(&catalog))),
                Err(err) => {
                    warn!(catalog_id = %catalog_id, error = %err, "could not load catalog");
                    ctx.toasts.notify(Notification::from_error("Could not load catalog", &err));
                }
            }
        });
    }

    view! {
        {move || match form.get() {
            Some(form) => view! { <CatalogFormPanel form=form /> }.into_any(),
            None => view! { <p class="muted">"Loading catalog..."</p> }.into_any(),
        }}
    }
}

#[component]
fn ColorField(label: &'static str, value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <div class="color-field">
                <input
                    type="color"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="mono"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
pub fn CatalogFormPanel(form: CatalogForm) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let mode = form.mode();
    let current_logo = form.logo_url.clone();
    let form = RwSignal::new(form);
    let background = RwSignal::new(form.get_untracked().background_color);
    let component = RwSignal::new(form.get_untracked().component_color);
    let preview = RwSignal::new(current_logo);
    let (saving, set_saving) = signal(false);

    on_cleanup(move || {
        if let Some(url) = preview.get_untracked().filter(|url| url.starts_with("blob:")) {
            commands::revoke_preview_url(&url);
        }
    });

    let on_file = Callback::new(move |file: web_sys::File| {
        load_image(file, preview, ctx.toasts, move |upload| {
            form.try_update(|f| f.select_logo(upload)).unwrap_or(Ok(()))
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let mut draft = form.get_untracked();
        draft.background_color = background.get_untracked();
        draft.component_color = component.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            let result = match commands::api() {
                Ok(api) => draft.submit(&api, &LocalStorageSession, &ctx.toasts).await,
                Err(err) => {
                    ctx.toasts.notify(Notification::from_error("Could not save", &err));
                    Err(err)
                }
            };
            set_saving.set(false);
            if let Ok(catalog_id) = result {
                store.browser().write().select(Some(catalog_id), &LocalStorageSession);
                ctx.reload_catalogs();
                ctx.navigate(Page::Catalogs);
            }
        });
    };

    let (heading, submit_label) = match mode {
        FormMode::Create => ("New catalog", "Create catalog"),
        FormMode::Edit => ("Edit catalog", "Save changes"),
    };

    view! {
        <div class="form-page">
            <form class="form-card" on:submit=submit>
                <h1>{heading}</h1>

                <div class="form-field">
                    <label>"Title"</label>
                    <input
                        type="text"
                        placeholder="My catalog"
                        prop:value=move || form.read().title.clone()
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <Show when=move || { let f = form.read(); !f.title.trim().is_empty() && !f.is_title_valid() }>
                        <p class="form-hint">"Use at least 2 characters."</p>
                    </Show>
                </div>

                <div class="form-field">
                    <label>"Description"</label>
                    <textarea
                        rows="3"
                        placeholder="What this catalog is about"
                        prop:value=move || form.read().description.clone()
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <ColorField label="Background color" value=background placeholder="#FFFFFF" />
                <ColorField label="Component color" value=component placeholder="#F2BADE" />

                <label class="checkbox-field">
                    <input
                        type="checkbox"
                        prop:checked=move || form.read().is_published
                        on:change=move |ev| form.update(|f| f.is_published = event_target_checked(&ev))
                    />
                    "Publish catalog"
                </label>

                <div class="form-field">
                    <label>"Logo"</label>
                    <FileDropZone on_file=on_file preview=preview />
                </div>

                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { submit_label }}
                    </button>
                    <button type="button" class="secondary-btn" on:click=move |_| ctx.navigate(Page::Catalogs)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
