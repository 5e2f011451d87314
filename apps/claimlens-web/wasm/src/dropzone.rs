//! Drag/drop and file-picker intake for the upload page.
//!
//! The page wires its DOM events straight into a `DropZone`; the zone
//! holds the single selected file and tells the owner about new
//! selections through a callback. Dropping a second file replaces the
//! first wholesale.

use claimlens_core::{format_size_mb, FileIntake};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

#[wasm_bindgen]
pub struct DropZone {
    intake: FileIntake<File>,
    on_select: Option<Function>,
}

#[wasm_bindgen]
impl DropZone {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DropZone {
        console_error_panic_hook::set_once();
        DropZone {
            intake: FileIntake::new(),
            on_select: None,
        }
    }

    /// Register the owner's selection callback. It receives the `File`
    /// and must not throw; a throwing callback surfaces to the page, not
    /// to the intake.
    #[wasm_bindgen(js_name = onFileSelect)]
    pub fn on_file_select(&mut self, callback: Function) {
        self.on_select = Some(callback);
    }

    /// Drop payload: take the first file, ignore the rest. An empty drop
    /// changes nothing.
    #[wasm_bindgen(js_name = handleDrop)]
    pub fn handle_drop(&mut self, event: DragEvent) -> Result<(), JsValue> {
        event.prevent_default();
        self.intake.set_drag_active(false);
        let files = event.data_transfer().and_then(|transfer| transfer.files());
        self.take_first(files)
    }

    #[wasm_bindgen(js_name = handleDragOver)]
    pub fn handle_drag_over(&mut self, event: DragEvent) {
        event.prevent_default();
        self.intake.set_drag_active(true);
    }

    #[wasm_bindgen(js_name = handleDragLeave)]
    pub fn handle_drag_leave(&mut self, event: DragEvent) {
        event.prevent_default();
        self.intake.set_drag_active(false);
    }

    /// Picker result set: same first-entry-wins semantics as a drop.
    #[wasm_bindgen(js_name = handleFileInput)]
    pub fn handle_file_input(&mut self, event: Event) -> Result<(), JsValue> {
        let files = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files());
        self.take_first(files)
    }

    /// Programmatic selection; same notification path as drop and picker.
    #[wasm_bindgen(js_name = selectFile)]
    pub fn select_file(&mut self, file: File) -> Result<(), JsValue> {
        self.select(file)
    }

    #[wasm_bindgen(js_name = isDragActive)]
    pub fn is_drag_active(&self) -> bool {
        self.intake.drag_active()
    }

    #[wasm_bindgen(js_name = hasFile)]
    pub fn has_file(&self) -> bool {
        self.intake.has_selection()
    }

    /// Another handle to the held file, for the submit call.
    pub fn file(&self) -> Option<File> {
        self.intake.selected().cloned()
    }

    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self) -> Option<String> {
        self.intake.selected().map(|file| file.name())
    }

    #[wasm_bindgen(js_name = fileSizeBytes)]
    pub fn file_size_bytes(&self) -> Option<f64> {
        self.intake.selected().map(|file| file.size())
    }

    /// "2.40 MB" style size line for the selected-file card.
    #[wasm_bindgen(js_name = fileSizeDisplay)]
    pub fn file_size_display(&self) -> Option<String> {
        self.intake.selected().map(|file| format_size_mb(file.size()))
    }

    /// Discard the held file. Local state change only: the selection
    /// callback does not fire.
    pub fn clear(&mut self) {
        self.intake.clear();
    }
}

impl DropZone {
    fn take_first(&mut self, files: Option<FileList>) -> Result<(), JsValue> {
        let Some(files) = files else {
            return Ok(());
        };
        let Some(first) = files.get(0) else {
            return Ok(());
        };
        self.select(first)
    }

    fn select(&mut self, file: File) -> Result<(), JsValue> {
        self.intake.select_first([file]);
        if let (Some(callback), Some(file)) = (&self.on_select, self.intake.selected()) {
            callback.call1(&JsValue::NULL, file)?;
        }
        Ok(())
    }
}

impl Default for DropZone {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use js_sys::Array;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_file(name: &str) -> File {
        let parts = Array::new();
        parts.push(&JsValue::from_str("file contents"));
        File::new_with_str_sequence(&parts, name).unwrap()
    }

    #[wasm_bindgen_test]
    fn starts_empty_and_inactive() {
        let zone = DropZone::new();
        assert!(!zone.has_file());
        assert!(!zone.is_drag_active());
        assert!(zone.file_name().is_none());
    }

    #[wasm_bindgen_test]
    fn second_selection_replaces_the_first() {
        let mut zone = DropZone::new();
        zone.select_file(test_file("first.pdf")).unwrap();
        zone.select_file(test_file("second.pdf")).unwrap();
        assert_eq!(zone.file_name().as_deref(), Some("second.pdf"));
    }

    #[wasm_bindgen_test]
    fn selection_fires_the_callback_with_the_file() {
        let mut zone = DropZone::new();
        let seen = Rc::new(Cell::new(false));
        let seen_in_callback = seen.clone();
        let callback = Closure::<dyn Fn(File)>::new(move |file: File| {
            assert_eq!(file.name(), "policy.pdf");
            seen_in_callback.set(true);
        });
        zone.on_file_select(callback.as_ref().clone().unchecked_into());
        zone.select_file(test_file("policy.pdf")).unwrap();
        assert!(seen.get());
    }

    #[wasm_bindgen_test]
    fn clear_discards_without_firing_the_callback() {
        let mut zone = DropZone::new();
        let calls = Rc::new(Cell::new(0u32));
        let calls_in_callback = calls.clone();
        let callback = Closure::<dyn Fn(File)>::new(move |_file: File| {
            calls_in_callback.set(calls_in_callback.get() + 1);
        });
        zone.on_file_select(callback.as_ref().clone().unchecked_into());
        zone.select_file(test_file("policy.pdf")).unwrap();
        zone.clear();
        assert!(!zone.has_file());
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    fn size_display_uses_two_decimals() {
        let mut zone = DropZone::new();
        zone.select_file(test_file("policy.pdf")).unwrap();
        let display = zone.file_size_display().unwrap();
        assert!(display.ends_with(" MB"), "got {display}");
    }
}
