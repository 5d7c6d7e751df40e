//! Cards View Component
//!
//! One large card per item: text on the left, image on the right.

use catalog_core::{format_price, EditField, Product};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::actions::RowCallbacks;
use crate::components::item_actions::{drag_row_class, product_key};
use crate::components::{ItemActionButtons, ItemEditField, ItemPriceEditField};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardsView(products: Signal<Vec<Product>>, card_background: Signal<String>) -> impl IntoView {
    view! {
        <div class="cards-view">
            <For each=move || products.get() key=product_key let:product>
                <CardRow product=product card_background=card_background />
            </For>
        </div>
    }
}

#[component]
fn CardRow(product: Product, card_background: Signal<String>) -> impl IntoView {
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
        <article
            class=drag_row_class(key.clone(), "card")
            style=move || format!("background-color: {};", card_background.get())
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
            <div class="card-body">
                <Show
                    when=is_editing.clone()
                    fallback=move || view! {
                        <h3 class="card-title">{title.clone()}</h3>
                        <p class="card-desc">{description.clone()}</p>
                        <span class="card-price">{price.clone()}</span>
                    }
                >
                    <ItemEditField field=EditField::Name class="edit-input title" />
                    <ItemEditField field=EditField::Description multiline=true />
                    <ItemPriceEditField />
                </Show>
                <ItemActionButtons product=product.clone() show_drag=true />
            </div>
            <div class="card-image">
                <img src=product.image.clone() alt=product.title.clone() />
            </div>
        </article>
    }
}
