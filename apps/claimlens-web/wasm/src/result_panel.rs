//! JS-facing wrapper over the pure result projection.

use claimlens_core::{ResultDisplay, StatusBanner};
use wasm_bindgen::prelude::*;

/// A snapshot of the projected submission state. Read-only: nothing here
/// can touch the submission lifecycle.
#[wasm_bindgen]
pub struct ResultPanel {
    display: ResultDisplay,
}

impl ResultPanel {
    pub fn new(display: ResultDisplay) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &ResultDisplay {
        &self.display
    }
}

#[wasm_bindgen]
impl ResultPanel {
    /// "idle" | "loading" | "error", or `None` once a result is showing.
    pub fn banner(&self) -> Option<String> {
        self.display.banner.map(|banner| {
            match banner {
                StatusBanner::Idle => "idle",
                StatusBanner::Loading => "loading",
                StatusBanner::Error => "error",
            }
            .to_string()
        })
    }

    #[wasm_bindgen(js_name = errorMessage)]
    pub fn error_message(&self) -> Option<String> {
        self.display.error_message.clone()
    }

    pub fn message(&self) -> Option<String> {
        self.display.message.clone()
    }

    #[wasm_bindgen(js_name = userQuery)]
    pub fn user_query(&self) -> Option<String> {
        self.display.user_query.clone()
    }

    #[wasm_bindgen(js_name = matchedClauses)]
    pub fn matched_clauses(&self) -> js_sys::Array {
        self.display
            .matched_clauses
            .iter()
            .map(JsValue::from)
            .collect()
    }

    #[wasm_bindgen(js_name = clauseCount)]
    pub fn clause_count(&self) -> u32 {
        self.display.matched_clauses.len() as u32
    }

    pub fn decision(&self) -> Option<String> {
        self.display.decision.clone()
    }

    pub fn amount(&self) -> Option<String> {
        self.display.amount.clone()
    }

    pub fn justification(&self) -> Option<String> {
        self.display.justification.clone()
    }

    /// Whether the page should show the result card at all.
    #[wasm_bindgen(js_name = hasResult)]
    pub fn has_result(&self) -> bool {
        self.display.has_result()
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.display).unwrap_or_default()
    }
}
