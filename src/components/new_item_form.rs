//! New Item Form Component
//!
//! Creates an item in the selected catalog. Name, price and an image are
//! required.

use catalog_core::{NewItemForm, Notification, Notifier};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::drop_zone::load_image;
use crate::components::FileDropZone;
use crate::context::{use_app_context, Page};
use crate::storage::LocalStorageSession;
use crate::store::{store_selected_catalog_id, use_app_store, AppStateStoreFields};

#[component]
pub fn NewItemPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let form = RwSignal::new(NewItemForm::default());
    let preview = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let catalog_title = move || {
        store.browser().read().selected_catalog().map(|catalog| catalog.title.clone()).unwrap_or_default()
    };

    on_cleanup(move || {
        if let Some(url) = preview.get_untracked() {
            commands::revoke_preview_url(&url);
        }
    });

    let on_file = Callback::new(move |file: web_sys::File| {
        load_image(file, preview, ctx.toasts, move |upload| {
            form.try_update(|f| f.select_image(upload)).unwrap_or(Ok(()))
        });
    });

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = form.get_untracked();
        let catalog_id = store_selected_catalog_id(&store);
        set_saving.set(true);

        spawn_local(async move {
            let result = match commands::api() {
                Ok(api) => draft.submit(&api, &LocalStorageSession, catalog_id.as_deref(), &ctx.toasts).await,
                Err(err) => {
                    ctx.toasts.notify(Notification::from_error("Could not create item", &err));
                    Err(err)
                }
            };
            set_saving.set(false);
            if result.is_ok() {
                ctx.reload_items();
                ctx.navigate(Page::Catalogs);
            }
        });
    };

    view! {
        <div class="form-page">
            <form class="form-card new-item-form" on:submit=create_item>
                <h1>"New item"</h1>
                <p class="muted">{move || format!("Adding to {}", catalog_title())}</p>

                <div class="form-field">
                    <label>"Name"</label>
                    <input
                        type="text"
                        placeholder="Chair"
                        prop:value=move || form.read().name.clone()
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Description"</label>
                    <textarea
                        rows="3"
                        placeholder="Wooden chair"
                        prop:value=move || form.read().description.clone()
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Price"</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="25.00"
                        prop:value=move || form.read().price.clone()
                        on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Image"</label>
                    <FileDropZone on_file=on_file preview=preview />
                </div>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="primary-btn"
                        disabled=move || saving.get() || !form.read().is_submittable()
                    >
                        {move || if saving.get() { "Creating..." } else { "Create item" }}
                    </button>
                    <button type="button" class="secondary-btn" on:click=move |_| ctx.navigate(Page::Catalogs)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
