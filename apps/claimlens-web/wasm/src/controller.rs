//! Upload controller: document-type profile, query text, and the
//! submission lifecycle, wired to the service over `fetch`.
//!
//! The lifecycle itself lives in `claimlens_core::AnalysisSession`; this
//! type owns the injected service base URL, assembles the multipart body,
//! and reports the transfer outcome back through the session so the
//! stale-response guard can decide whether it still matters.

use std::cell::RefCell;

use claimlens_core::{
    AnalysisSession, ResultDisplay, SubmissionState, SubmissionTicket, SubmitError, TransferError,
};
use js_sys::{Object, Reflect};
use shared_types::{AnalysisReport, DocumentProfile};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, File, FormData, Request, RequestInit, RequestMode, Response};

use crate::result_panel::ResultPanel;

#[wasm_bindgen]
pub struct UploadController {
    api_base: String,
    session: RefCell<AnalysisSession>,
}

#[wasm_bindgen]
impl UploadController {
    /// Build a controller for a navigation key like "pdf" against the
    /// given service base URL. Fails for an unknown key; the page falls
    /// back to its home route instead of rendering this view.
    #[wasm_bindgen(constructor)]
    pub fn new(type_key: &str, api_base: &str) -> Result<UploadController, JsValue> {
        console_error_panic_hook::set_once();
        let session = AnalysisSession::from_key(type_key)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(UploadController {
            api_base: api_base.trim_end_matches('/').to_string(),
            session: RefCell::new(session),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.profile().title.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.profile().description.to_string()
    }

    /// Extension filter for the picker `accept` attribute. Advisory only.
    #[wasm_bindgen(getter)]
    pub fn accept(&self) -> String {
        self.profile().accept.to_string()
    }

    #[wasm_bindgen(getter, js_name = typeKey)]
    pub fn type_key(&self) -> String {
        self.profile().kind.key().to_string()
    }

    /// Full upload URL for this document type.
    #[wasm_bindgen(getter, js_name = uploadUrl)]
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base, self.profile().endpoint)
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&self, text: &str) {
        self.session.borrow_mut().set_query(text);
    }

    pub fn query(&self) -> String {
        self.session.borrow().query().to_string()
    }

    #[wasm_bindgen(js_name = isSubmitting)]
    pub fn is_submitting(&self) -> bool {
        self.session.borrow().state().is_submitting()
    }

    /// Resolutions discarded by the stale guard so far. Diagnostic only.
    #[wasm_bindgen(js_name = staleDiscarded)]
    pub fn stale_discarded(&self) -> u32 {
        self.session.borrow().stale_discarded() as u32
    }

    /// Snapshot of the current state, projected for rendering.
    pub fn display(&self) -> ResultPanel {
        ResultPanel::new(ResultDisplay::project(self.session.borrow().state()))
    }

    /// One submission attempt. Returns `{accepted, message?}` when the
    /// attempt was refused (validation failure, or a request already in
    /// flight; no network activity either way), `{accepted, state}` once
    /// the transfer settled, and `{accepted, stale}` when the resolution
    /// arrived too late to matter.
    pub async fn submit(&self, file: Option<File>) -> Result<JsValue, JsValue> {
        let ticket = match self.session.borrow_mut().begin_submission(file.is_some()) {
            Ok(ticket) => ticket,
            Err(err) => return rejection_result(&err),
        };
        let Some(file) = file else {
            // A ticket is only issued when a file is present.
            return Err(JsValue::from_str("submission ticket issued without a file"));
        };

        let outcome = self.perform_upload(&file, &ticket).await;
        if let Err(cause) = &outcome {
            console::error_1(&format!("upload failed: {cause}").into());
        }

        let applied = self.session.borrow_mut().complete_submission(&ticket, outcome);
        if !applied {
            console::warn_1(&"discarded stale upload resolution".into());
        }
        settled_result(applied, &self.session.borrow())
    }
}

impl UploadController {
    fn profile(&self) -> &'static DocumentProfile {
        self.session.borrow().profile()
    }

    /// POST the multipart body and normalize the response. Exactly one
    /// request per ticket; every failure mode collapses into a
    /// `TransferError` for the session to record.
    async fn perform_upload(
        &self,
        file: &File,
        ticket: &SubmissionTicket,
    ) -> Result<AnalysisReport, TransferError> {
        let form = FormData::new().map_err(|err| network_error(&err))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|err| network_error(&err))?;
        form.append_with_str("user_query", ticket.query())
            .map_err(|err| network_error(&err))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        // No Content-Type header: the user agent sets the multipart
        // boundary itself.
        opts.set_body(form.as_ref());

        let url = format!("{}{}", self.api_base, ticket.endpoint());
        let request =
            Request::new_with_str_and_init(&url, &opts).map_err(|err| network_error(&err))?;

        let window = web_sys::window()
            .ok_or_else(|| TransferError::Network("no window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| network_error(&err))?;
        let response: Response = response
            .dyn_into()
            .map_err(|err| network_error(&err))?;

        if !response.ok() {
            return Err(TransferError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(|err| network_error(&err))?)
            .await
            .map_err(|err| network_error(&err))?;
        let body = body.as_string().unwrap_or_default();
        AnalysisReport::parse(&body)
            .map_err(|err| TransferError::MalformedBody(err.to_string()))
    }
}

fn network_error(err: &JsValue) -> TransferError {
    let text = err
        .as_string()
        .or_else(|| {
            Reflect::get(err, &"message".into())
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"));
    TransferError::Network(text)
}

/// Refusal object for the page: the attempt was a no-op.
fn rejection_result(err: &SubmitError) -> Result<JsValue, JsValue> {
    let result = Object::new();
    Reflect::set(&result, &"accepted".into(), &false.into())?;
    Reflect::set(&result, &"message".into(), &err.to_string().into())?;
    Ok(result.into())
}

/// Completion object for the page once a transfer settled.
fn settled_result(applied: bool, session: &AnalysisSession) -> Result<JsValue, JsValue> {
    let result = Object::new();
    Reflect::set(&result, &"accepted".into(), &true.into())?;
    Reflect::set(&result, &"stale".into(), &(!applied).into())?;
    if applied {
        let state = match session.state() {
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
        };
        Reflect::set(&result, &"state".into(), &state.into())?;
    }
    Ok(result.into())
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn unknown_type_key_fails_construction() {
        assert!(UploadController::new("spreadsheet", "http://localhost:8000").is_err());
    }

    #[wasm_bindgen_test]
    fn profile_getters_follow_the_type_key() {
        let controller = UploadController::new("word", "http://localhost:8000/").unwrap();
        assert_eq!(controller.title(), "Word Document Upload");
        assert_eq!(controller.accept(), ".doc,.docx");
        assert_eq!(
            controller.upload_url(),
            "http://localhost:8000/upload-docs"
        );
    }

    #[wasm_bindgen_test]
    async fn submit_without_a_file_is_refused_without_network_activity() {
        let controller = UploadController::new("pdf", "http://localhost:8000").unwrap();
        controller.set_query("knee surgery claim");
        let outcome = controller.submit(None).await.unwrap();
        let accepted = Reflect::get(&outcome, &"accepted".into())
            .unwrap()
            .as_bool()
            .unwrap();
        assert!(!accepted);
        assert_eq!(controller.display().banner().as_deref(), Some("idle"));
    }

    #[wasm_bindgen_test]
    async fn submit_with_a_blank_query_is_refused() {
        let controller = UploadController::new("pdf", "http://localhost:8000").unwrap();
        controller.set_query("   ");
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("file contents"));
        let file = File::new_with_str_sequence(&parts, "policy.pdf").unwrap();
        let outcome = controller.submit(Some(file)).await.unwrap();
        let accepted = Reflect::get(&outcome, &"accepted".into())
            .unwrap()
            .as_bool()
            .unwrap();
        assert!(!accepted);
        assert!(!controller.is_submitting());
    }
}
