//! Drop Zone Component
//!
//! Image picker that also accepts a file dropped from the desktop.

use catalog_core::api::UploadFile;
use catalog_core::{Notification, Notifier, ValidationError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::FileDropHandlers;
use tracing::warn;

use crate::commands;
use crate::toast::Toasts;

/// File drop area with a hidden `<input type="file">` and an image preview
#[component]
pub fn FileDropZone(
    /// Called with the picked or dropped file
    #[prop(into)]
    on_file: Callback<web_sys::File>,
    /// Image shown inside the zone, if any
    #[prop(into)]
    preview: Signal<Option<String>>,
    #[prop(into, default = "Drop an image or click to choose".to_string())] hint: String,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let handlers = FileDropHandlers::new(Callback::new(move |active| set_is_over.set(active)), on_file);

    view! {
        <label
            class=move || if is_over.get() { "file-drop active" } else { "file-drop" }
            on:dragover=handlers.on_dragover()
            on:dragleave=handlers.on_dragleave()
            on:drop=handlers.on_drop()
        >
            <input
                type="file"
                accept="image/*"
                class="hidden"
                on:change=move |ev| {
                    if let Some(file) = commands::picked_file(&ev) {
                        on_file.run(file);
                    }
                }
            />
            {move || match preview.get() {
                Some(url) => view! { <img class="file-drop-preview" src=url alt="Preview" /> }.into_any(),
                None => view! { <span class="file-drop-hint">{hint.clone()}</span> }.into_any(),
            }}
        </label>
    }
}

/// Read `file`, hand it to `select` and swap the preview when accepted
pub fn load_image<F>(file: web_sys::File, preview: RwSignal<Option<String>>, toasts: Toasts, select: F)
where
    F: FnOnce(UploadFile) -> Result<(), ValidationError> + 'static,
{
    spawn_local(async move {
        let upload = match commands::read_upload_file(&file).await {
            Ok(upload) => upload,
            Err(err) => {
                warn!(error = %err, "could not read picked file");
                toasts.notify(Notification::error("Could not read file", err));
                return;
            }
        };
        if let Err(err) = select(upload) {
            toasts.notify(Notification::from_error("Invalid file", &err.into()));
            return;
        }
        if let Some(previous) = preview.get_untracked() {
            commands::revoke_preview_url(&previous);
        }
        preview.set(commands::preview_url(&file));
    });
}
