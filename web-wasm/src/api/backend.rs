//! Bid backend client
//!
//! Typed wrapper over the backend endpoints, via the browser fetch
//! API. A non-2xx response surfaces the body's `detail` string to the
//! caller; when the body carries none, a fixed per-operation fallback
//! message is used instead.

use bid_writer_common::{
    BackendConfig, BidRequest, BidResult, Error, ParsedProject, RefineRequest, RefineResponse,
    Result, SmartRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Backend base address, overridable at build time
pub const API_URL: &str = match option_env!("BID_WRITER_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

const GENERATE_FALLBACK: &str = "Failed to generate bid. Please check your API configuration.";

/// Load the provider/model catalog
///
/// Called once at startup; a failure is logged by the caller and never
/// blocks any other feature.
pub async fn fetch_config() -> Result<BackendConfig> {
    request_json("GET", "/config", None, "Failed to load config").await
}

/// Extract structured project data from pasted page content
pub async fn parse_project(request: &SmartRequest) -> Result<ParsedProject> {
    post_json("/parse-project", request, "Failed to parse content").await
}

/// Parse pasted content and generate a bid in one step
pub async fn smart_generate(request: &SmartRequest) -> Result<BidResult> {
    post_json("/smart-generate-bid", request, GENERATE_FALLBACK).await
}

/// Generate a bid from structured form fields
pub async fn generate_bid(request: &BidRequest) -> Result<BidResult> {
    post_json("/generate-bid", request, GENERATE_FALLBACK).await
}

/// Apply a refinement to an existing bid
pub async fn refine_bid(request: &RefineRequest) -> Result<RefineResponse> {
    post_json("/refine-bid", request, "Failed to refine bid").await
}

async fn post_json<B, T>(path: &str, body: &B, fallback: &str) -> Result<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload =
        serde_json::to_string(body).map_err(|e| Error::Request(format!("{}: {}", fallback, e)))?;
    request_json("POST", path, Some(&payload), fallback).await
}

/// Issue one fetch call and decode the JSON response
async fn request_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<&str>,
    fallback: &str,
) -> Result<T> {
    let transport = |_: JsValue| Error::Request(fallback.to_string());

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(payload) = body {
        opts.set_body(&JsValue::from_str(payload));
    }

    let url = format!("{}{}", API_URL, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| Error::Request(fallback.to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        let body_text = JsFuture::from(resp.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .unwrap_or_default();
        return Err(Error::Request(error_detail(&body_text, fallback)));
    }

    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(transport)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Request(format!("{}: {}", fallback, e)))
}

/// Pull the `detail` string out of an error body, if it carries one
fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}
