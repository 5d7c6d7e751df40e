//! Delete Confirm Button Component
//!
//! Two-step delete for an item row or the selected catalog. The prompt
//! names what goes away, and an open prompt folds back as soon as the
//! target becomes busy (a save starts, the selection is cleared).

use leptos::prelude::*;

/// # Arguments
/// * `subject` - What gets deleted, shown in the prompt
/// * `disabled` - Blocks both steps
/// * `on_confirm` - Runs once per confirmed prompt
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] subject: Signal<String>,
    #[prop(into, default = "×".to_string())] label: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);

    Effect::new(move |_| {
        if disabled.get() {
            confirming.set(false);
        }
    });

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if disabled.get_untracked() || !confirming.get_untracked() {
            return;
        }
        confirming.set(false);
        on_confirm.run(());
    };
    let dismiss = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        confirming.set(false);
    };

    view! {
        <Show
            when=move || confirming.get()
            fallback={
                let button_class = button_class.clone();
                let label = label.clone();
                move || view! {
                    <button
                        type="button"
                        class=button_class.clone()
                        title=move || format!("Delete {}", subject.get())
                        disabled=move || disabled.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            confirming.set(true);
                        }
                    >
                        {label.clone()}
                    </button>
                }
            }
        >
            <span
                class="delete-confirm"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        confirming.set(false);
                    }
                }
            >
                <span class="delete-confirm-text">{move || format!("Delete {}?", subject.get())}</span>
                <button type="button" class="confirm-btn" disabled=move || disabled.get() on:click=confirm>
                    "✓"
                </button>
                <button type="button" class="cancel-btn" on:click=dismiss>"✗"</button>
            </span>
        </Show>
    }
}
