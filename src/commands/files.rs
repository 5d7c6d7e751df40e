//! File Commands
//!
//! Reading picked files into memory and previewing them.

use catalog_core::api::UploadFile;
use wasm_bindgen_futures::JsFuture;

/// Read the whole file; the multipart upload needs the bytes
pub async fn read_upload_file(file: &web_sys::File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile { file_name: file.name(), mime: file.type_(), bytes })
}

/// Object URL for an `<img>` preview; release it with `revoke_preview_url`
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_preview_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// First file of an `<input type="file">` change event
pub fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    // Allow picking the same file again
    input.set_value("");
    file
}
