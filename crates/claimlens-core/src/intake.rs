//! Single-file intake shared by the drop target and the picker.

/// Holds at most one selected file. Generic over the platform file handle
/// so the replacement semantics are testable without a browser; the wasm
/// layer instantiates it with `web_sys::File`.
#[derive(Debug, Clone)]
pub struct FileIntake<F> {
    selected: Option<F>,
    drag_active: bool,
}

impl<F> FileIntake<F> {
    pub fn new() -> Self {
        Self {
            selected: None,
            drag_active: false,
        }
    }

    /// Take the first file of a drop or picker payload, ignoring the rest.
    /// An empty payload changes nothing. A non-empty payload replaces any
    /// previous selection wholesale and returns the new selection.
    pub fn select_first<I>(&mut self, files: I) -> Option<&F>
    where
        I: IntoIterator<Item = F>,
    {
        let first = files.into_iter().next()?;
        self.selected = Some(first);
        self.selected.as_ref()
    }

    /// Discard the held file. A local state change, not a new selection:
    /// callers must not fire their selection callback for it.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Presentational flag for the drop target; no data-model meaning.
    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }
}

impl<F> Default for FileIntake<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-decimal megabyte display, the format the upload widget shows next
/// to the selected file name.
pub fn format_size_mb(size_bytes: f64) -> String {
    format!("{:.2} MB", size_bytes / 1024.0 / 1024.0)
}
