//! Toast Viewport Component

use catalog_core::Variant;
use leptos::prelude::*;

use crate::context::use_app_context;

/// Stack of live toasts, newest last
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_app_context().toasts;

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                let:toast
            >
                {
                    let id = toast.id;
                    let class = match toast.notification.variant {
                        Variant::Default => "toast",
                        Variant::Destructive => "toast destructive",
                    };
                    let description = toast.notification.description.clone();
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <div class="toast-title">{toast.notification.title.clone()}</div>
                            {(!description.is_empty())
                                .then(|| view! { <div class="toast-description">{description}</div> })}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
