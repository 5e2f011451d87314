//! Browser client for the claim analysis service.
//!
//! The page script owns the DOM; this crate owns the workflow. A
//! `DropZone` holds the one selected file, an `UploadController` drives
//! the submission lifecycle against the injected service base URL, and a
//! `ResultPanel` hands the projected state back for rendering.

use wasm_bindgen::prelude::*;

pub mod controller;
pub mod dropzone;
pub mod health;
pub mod result_panel;

pub use controller::UploadController;
pub use dropzone::DropZone;
pub use health::check_service_health;
pub use result_panel::ResultPanel;

/// Titles and picker filters for a navigation key, for pages that render
/// the header before constructing a controller. Returns `None` for an
/// unknown key so the page can fall back to its home route.
#[wasm_bindgen(js_name = documentProfileJson)]
pub fn document_profile_json(type_key: &str) -> Option<String> {
    let profile = shared_types::DocumentProfile::for_key(type_key)?;
    serde_json::to_string(&serde_json::json!({
        "typeKey": profile.kind.key(),
        "title": profile.title,
        "description": profile.description,
        "accept": profile.accept,
        "endpoint": profile.endpoint,
    }))
    .ok()
}
