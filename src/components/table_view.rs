//! Table View Component

use catalog_core::{format_price, EditField, Product};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::actions::RowCallbacks;
use crate::components::item_actions::{drag_row_class, product_key};
use crate::components::{ItemActionButtons, ItemEditField, ItemPriceEditField};
use crate::store::{use_app_store, AppStateStoreFields};

/// Image / product / description / price table with row actions
#[component]
pub fn TableView(
    products: Signal<Vec<Product>>,
    business_name: Signal<String>,
    background: Signal<String>,
) -> impl IntoView {
    let style = move || format!("background-color: {};", background.get());

    view! {
        <div class="table-view" style=style>
            <div class="table-header" style=style>
                <h2 class="table-title">{move || business_name.get()}</h2>
            </div>
            <table class="item-table">
                <thead>
                    <tr style=style>
                        <th>"Image"</th>
                        <th>"Product"</th>
                        <th>"Description"</th>
                        <th class="numeric">"Price"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || products.get() key=product_key let:product>
                        <TableRow product=product />
                    </For>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn TableRow(product: Product) -> impl IntoView {
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
        <tr
            class=drag_row_class(key.clone(), "table-row")
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
            <td>
                <div class="table-thumb">
                    <img src=product.image.clone() alt=product.title.clone() />
                </div>
            </td>
            <Show
                when=is_editing.clone()
                fallback=move || view! {
                    <td class="table-name">{title.clone()}</td>
                    <td class="table-desc">{description.clone()}</td>
                    <td class="numeric table-price">{price.clone()}</td>
                }
            >
                <td><ItemEditField field=EditField::Name /></td>
                <td><ItemEditField field=EditField::Description multiline=true /></td>
                <td class="numeric"><ItemPriceEditField /></td>
            </Show>
            <td>
                <ItemActionButtons product=product.clone() show_drag=true />
            </td>
        </tr>
    }
}
