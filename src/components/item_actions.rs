//! Item Action Buttons Component
//!
//! Edit / Save / Cancel / Move / Delete controls of one item row.

use catalog_core::{EditTarget, Product};
use leptos::prelude::*;

use crate::actions::RowCallbacks;
use crate::components::DeleteConfirmButton;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemActionButtons(product: Product, #[prop(optional)] show_drag: bool) -> impl IntoView {
    let store = use_app_store();
    let callbacks = expect_context::<RowCallbacks>();

    let key = product.item_uuid.clone();
    let is_editing = {
        let key = key.clone();
        move || store.edit().read().is_editing(&key)
    };
    let is_saving = move || store.edit().read().is_saving();
    let is_locked = {
        let key = key.clone();
        move || store.edit().read().is_locked(&key)
    };
    let target = EditTarget::from(&product);
    let title = product.title.clone();

    view! {
        <div class="item-actions">
            <Show
                when=is_editing
                fallback={
                    let is_locked = is_locked.clone();
                    let key = key.clone();
                    move || {
                        let target = target.clone();
                        let key = key.clone();
                        view! {
                            <button
                                type="button"
                                class="item-btn"
                                disabled={
                                    let is_locked = is_locked.clone();
                                    move || is_saving() || is_locked()
                                }
                                on:click=move |_| callbacks.start_edit.run(target.clone())
                            >
                                "✎ Edit"
                            </button>
                            {show_drag.then(|| {
                                let is_locked = is_locked.clone();
                                view! {
                                    <span
                                        class=move || if is_locked() { "item-drag-handle locked" } else { "item-drag-handle" }
                                        title="Drag to reorder"
                                    >
                                        "⠿ Move"
                                    </span>
                                }
                            })}
                            <DeleteConfirmButton
                                button_class="item-btn delete-btn"
                                subject=Signal::stored(format!("\"{}\"", title))
                                disabled=Signal::derive(is_saving)
                                on_confirm=Callback::new(move |_| callbacks.delete.run(key.clone()))
                            />
                        }
                    }
                }
            >
                <button
                    type="button"
                    class="item-btn primary"
                    disabled=is_saving
                    on:click=move |_| callbacks.save_edit.run(())
                >
                    {move || if is_saving() { "Saving..." } else { "Save" }}
                </button>
                <button
                    type="button"
                    class="item-btn"
                    disabled=is_saving
                    on:click=move |_| callbacks.cancel_edit.run(())
                >
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}

/// `<For>` key covering every rendered field, so confirmed edits re-render
pub fn product_key(product: &Product) -> (String, String, String, u64, String) {
    (
        product.item_uuid.clone(),
        product.title.clone(),
        product.description.clone(),
        product.price.to_bits(),
        product.image.clone(),
    )
}

/// Row class with `drag-over` / `dragging` markers
pub fn drag_row_class(key: String, base: &'static str) -> impl Fn() -> String + Clone + Send + Sync + 'static {
    let store = use_app_store();
    move || {
        let drag = store.drag().read();
        let mut class = base.to_string();
        if drag.drag_over_item_uuid() == Some(key.as_str()) {
            class.push_str(" drag-over");
        }
        if drag.dragging_item_uuid() == Some(key.as_str()) {
            class.push_str(" dragging");
        }
        class
    }
}
