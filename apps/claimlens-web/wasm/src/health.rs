//! Service health probe.
//!
//! The analysis service exposes `GET /health`; the landing page uses it
//! to show whether analysis is available. Informational only; it gates
//! nothing in the submission flow.

use js_sys::{Object, Reflect};
use shared_types::ServiceHealth;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Request, RequestInit, RequestMode, Response};

/// Probe the service. Resolves to
/// `{reachable, healthy, status?, modelLoaded?}`; an unreachable or
/// non-2xx service is reported, never thrown.
#[wasm_bindgen(js_name = checkServiceHealth)]
pub async fn check_service_health(api_base: &str) -> Result<JsValue, JsValue> {
    let url = format!("{}/health", api_base.trim_end_matches('/'));

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(&url, &opts)?;

    let window = web_sys::window().ok_or("No window")?;
    let response = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(response) => response,
        Err(err) => {
            console::warn_2(&"health probe failed:".into(), &err);
            return health_result(false, None);
        }
    };
    let response: Response = response.dyn_into()?;
    if !response.ok() {
        return health_result(false, None);
    }

    let body = JsFuture::from(response.text()?).await?;
    let health = body
        .as_string()
        .and_then(|text| ServiceHealth::parse(&text).ok())
        .unwrap_or_default();
    health_result(true, Some(health))
}

fn health_result(reachable: bool, health: Option<ServiceHealth>) -> Result<JsValue, JsValue> {
    let result = Object::new();
    Reflect::set(&result, &"reachable".into(), &reachable.into())?;
    let healthy = health.as_ref().is_some_and(ServiceHealth::is_healthy);
    Reflect::set(&result, &"healthy".into(), &healthy.into())?;

    if let Some(health) = health {
        if let Some(status) = health.status {
            Reflect::set(&result, &"status".into(), &status.into())?;
        }
        if let Some(model_loaded) = health.model_loaded {
            Reflect::set(&result, &"modelLoaded".into(), &model_loaded.into())?;
        }
    }

    Ok(result.into())
}
