//! Reading picked files from `<input type="file">` elements.

#[cfg(test)]
#[path = "file_input_test.rs"]
mod file_input_test;

use super::image_url::content_type_for;
use crate::net::employees::ImageUpload;

/// Build an upload, inferring the MIME type from the file name when the
/// browser did not report one.
pub fn upload_from_parts(file_name: String, content_type: String, bytes: Vec<u8>) -> ImageUpload {
    let content_type = if content_type.trim().is_empty() {
        content_type_for(&file_name).to_owned()
    } else {
        content_type
    };
    ImageUpload { file_name, content_type, bytes }
}

/// First file selected in the input that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read the whole file into memory.
///
/// # Errors
///
/// Returns the JS error text if the browser fails to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_upload(file: web_sys::File) -> Result<ImageUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(upload_from_parts(file.name(), file.type_(), bytes))
}
