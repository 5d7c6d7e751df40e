//! Item Edit Fields Component
//!
//! Inputs bound to the draft of the item being edited.

use catalog_core::EditField;
use leptos::prelude::*;

use crate::actions::RowCallbacks;
use crate::store::{use_app_store, AppStateStoreFields};

/// One draft field; disabled while the save is in flight
#[component]
pub fn ItemEditField(
    field: EditField,
    #[prop(into, default = "edit-input".to_string())] class: String,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let store = use_app_store();
    let callbacks = expect_context::<RowCallbacks>();
    let value = move || store.edit().read().draft().get(field).to_string();
    let saving = move || store.edit().read().is_saving();

    if multiline {
        view! {
            <textarea
                class=class
                rows="3"
                prop:value=value
                disabled=saving
                on:input=move |ev| callbacks.change_edit.run((field, event_target_value(&ev)))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class=class
                prop:value=value
                disabled=saving
                on:input=move |ev| callbacks.change_edit.run((field, event_target_value(&ev)))
            />
        }
        .into_any()
    }
}

/// Price input followed by the currency label
#[component]
pub fn ItemPriceEditField(#[prop(into, default = "ARS".to_string())] currency: String) -> impl IntoView {
    view! {
        <div class="edit-price">
            <ItemEditField field=EditField::Price class="edit-input price" />
            <span class="edit-currency">{currency}</span>
        </div>
    }
}
