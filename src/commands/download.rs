//! Download Commands
//!
//! Saving bytes produced by the backend as a browser download.

use wasm_bindgen::{JsCast, JsValue};

/// Trigger a download of `bytes` through a temporary anchor
pub fn save_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), String> {
    save_bytes_inner(bytes, file_name, mime).map_err(|e| format!("{e:?}"))
}

fn save_bytes_inner(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link = document.create_element("a")?.dyn_into::<web_sys::HtmlAnchorElement>()?;
    link.set_href(&url);
    link.set_download(file_name);
    body.append_child(&link)?;
    link.click();
    link.remove();
    web_sys::Url::revoke_object_url(&url)
}
