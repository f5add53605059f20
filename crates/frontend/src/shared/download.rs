//! Browser file download helpers.
//!
//! Used by the quotation PDF export: the bytes arrive through the API
//! gateway and leave through a temporary Blob URL.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Wrap raw bytes in a Blob with the given MIME type.
fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    let buffer = js_sys::Uint8Array::from(bytes);
    array.push(&buffer.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_buffer_source_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger a browser download through a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

/// Save PDF bytes as a downloaded file.
pub fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    if bytes.is_empty() {
        return Err("Không có dữ liệu để tải xuống".to_string());
    }
    let blob = create_blob(bytes, "application/pdf")?;
    download_blob(&blob, filename)
}
