//! Checklist View Component
//!
//! Compact list with a thumbnail, the text and a price tag per row.

use catalog_core::{format_price, EditField, Product};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::actions::RowCallbacks;
use crate::components::item_actions::{drag_row_class, product_key};
use crate::components::{ItemActionButtons, ItemEditField, ItemPriceEditField};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ChecklistView(
    products: Signal<Vec<Product>>,
    business_name: Signal<String>,
    container_background: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            class="checklist-view"
            style=move || format!("background-color: {};", container_background.get())
        >
            <div class="checklist-header">
                <h2 class="checklist-title">"Products " {move || business_name.get()}</h2>
                <p class="checklist-subtitle">"Full catalog with prices"</p>
            </div>
            <div class="checklist-items">
                <For each=move || products.get() key=product_key let:product>
                    <ChecklistRow product=product />
                </For>
            </div>
        </div>
    }
}

#[component]
fn ChecklistRow(product: Product) -> impl IntoView {
    let store = use_app_store();
    let callbacks = expect_context::<RowCallbacks>();
    let key = product.item_uuid.clone();
    let is_editing = {
        let key = key.clone();
        move || store.edit().read().is_editing(&key)
    };

    let title = product.title.clone();
    let description = product.description.clone();
    let price = format_price(product.price);

    view! {
        <div
            class=drag_row_class(key.clone(), "checklist-item")
            draggable={
                let is_editing = is_editing.clone();
                move || if is_editing() { "false" } else { "true" }
            }
            on:dragstart=make_on_dragstart(key.clone(), callbacks.drag_start)
            on:dragenter=make_on_dragenter(key.clone(), callbacks.drag_enter)
            on:dragover=make_on_dragover()
            on:dragleave=make_on_dragleave(callbacks.drag_leave)
            on:drop=make_on_drop(key.clone(), callbacks.drop)
            on:dragend=make_on_dragend(callbacks.drag_end)
        >
            <div class="checklist-thumb">
                <img src=product.image.clone() alt=product.title.clone() />
            </div>
            <Show
                when=is_editing.clone()
                fallback=move || view! {
                    <div class="checklist-info">
                        <h3 class="checklist-name">{title.clone()}</h3>
                        <p class="checklist-desc">{description.clone()}</p>
                    </div>
                    <div class="checklist-price">{price.clone()}</div>
                }
            >
                <div class="checklist-info">
                    <ItemEditField field=EditField::Name />
                    <ItemEditField field=EditField::Description multiline=true />
                </div>
                <ItemPriceEditField />
            </Show>
            <ItemActionButtons product=product.clone() show_drag=true />
        </div>
    }
}
