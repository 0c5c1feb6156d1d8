//! Backend API Client
//!
//! Thin fetch wrappers over the forum backend's JSON endpoints. Every
//! endpoint answers an `{ok, ...}` envelope; `ok: false` carries an error
//! message that is surfaced to the user verbatim, anything else that goes
//! wrong on the wire collapses into [`ApiError::Network`]. Nothing is
//! retried automatically.

use std::fmt;

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Promise};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{AbortController, Request, RequestInit, Response};

use crate::models::{Character, ForumDraft, ForumSummary, ThreadDetail};

/// Upper bound on any single request, after which the transport is aborted.
const FETCH_TIMEOUT_MS: u32 = 5_000;

/// Client-side request outcome, split the way the UI reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered `ok: false`; the message is shown verbatim.
    Backend(String),
    /// Transport failure, timeout, or a body that was not valid JSON.
    Network,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Backend(msg) => write!(f, "{msg}"),
            ApiError::Network => write!(f, "Network error"),
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Percent-encode one query value.
fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Perform a JSON request and hand back the parsed response body.
///
/// The fetch promise is raced against a timeout that also aborts the
/// underlying transport, so a stalled backend cannot hold a page
/// transition hostage.
async fn fetch_json(method: &str, url: &str, body: Option<String>) -> Result<JsValue, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Network)?;

    let controller = AbortController::new().map_err(|_| ApiError::Network)?;
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_signal(Some(&controller.signal()));
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::Network)?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::Network)?;
    }

    let fetched = window.fetch_with_request(&request);
    let timeout = future_to_promise(async move {
        TimeoutFuture::new(FETCH_TIMEOUT_MS).await;
        controller.abort();
        Err(JsValue::from_str("request timed out"))
    });

    let raced = Promise::race(&Array::of2(&fetched, &timeout));
    let resp_value = JsFuture::from(raced).await.map_err(|_| ApiError::Network)?;
    let resp: Response = resp_value.dyn_into().map_err(|_| ApiError::Network)?;

    let json = resp.json().map_err(|_| ApiError::Network)?;
    JsFuture::from(json).await.map_err(|_| ApiError::Network)
}

/// Check the `{ok, error}` envelope, then deserialize the payload fields.
fn unwrap_envelope<T: for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, ApiError> {
    let envelope: Envelope =
        serde_wasm_bindgen::from_value(value.clone()).map_err(|_| ApiError::Network)?;
    if !envelope.ok {
        return Err(ApiError::Backend(
            envelope.error.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }
    serde_wasm_bindgen::from_value(value).map_err(|_| ApiError::Network)
}

async fn get<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
    unwrap_envelope(fetch_json("GET", url, None).await?)
}

// ========================
// Characters
// ========================

#[derive(Deserialize)]
struct CharactersPayload {
    #[serde(default)]
    characters: Vec<Character>,
}

pub async fn my_characters() -> Result<Vec<Character>, ApiError> {
    let payload: CharactersPayload = get("/api/my_characters").await?;
    Ok(payload.characters)
}

// ========================
// Forums
// ========================

#[derive(Deserialize)]
struct ForumsPayload {
    #[serde(default)]
    forums: Vec<ForumSummary>,
}

#[derive(Deserialize)]
struct ThreadPayload {
    thread: ThreadDetail,
}

#[derive(Deserialize)]
struct SavedPayload {
    id: String,
}

/// List the current user's forums, optionally filtered by status and a
/// free-text query (title or any character field, matched server-side).
pub async fn my_forums(status: Option<&str>, q: Option<&str>) -> Result<Vec<ForumSummary>, ApiError> {
    let mut url = String::from("/api/my_forums");
    let mut sep = '?';
    if let Some(status) = status {
        url.push(sep);
        url.push_str("status=");
        url.push_str(&encode(status));
        sep = '&';
    }
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        url.push(sep);
        url.push_str("q=");
        url.push_str(&encode(q));
    }
    let payload: ForumsPayload = get(&url).await?;
    Ok(payload.forums)
}

/// Fetch one of the user's forums for editing.
pub async fn my_forum(id: &str) -> Result<ThreadDetail, ApiError> {
    let payload: ThreadPayload = get(&format!("/api/my_forums/{id}")).await?;
    Ok(payload.thread)
}

pub async fn delete_forum(id: &str) -> Result<(), ApiError> {
    let value = fetch_json("DELETE", &format!("/api/my_forums/{id}"), None).await?;
    let _: Envelope = unwrap_envelope(value)?;
    Ok(())
}

/// Create (`id: None`) or update a forum. Returns the canonical thread id
/// the caller should navigate to.
pub async fn save_forum(draft: &ForumDraft) -> Result<String, ApiError> {
    let body = serde_json::to_string(draft).map_err(|_| ApiError::Network)?;
    let value = fetch_json("POST", "/createforum", Some(body)).await?;
    let payload: SavedPayload = unwrap_envelope(value)?;
    Ok(payload.id)
}

/// List published forums for the community page.
pub async fn published_forums(q: Option<&str>) -> Result<Vec<ForumSummary>, ApiError> {
    let mut url = String::from("/api/published_forums");
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        url.push_str("?q=");
        url.push_str(&encode(q));
    }
    let payload: ForumsPayload = get(&url).await?;
    Ok(payload.forums)
}

/// Fetch a published thread for viewing.
pub async fn thread(id: &str) -> Result<ThreadDetail, ApiError> {
    let payload: ThreadPayload = get(&format!("/api/thread/{id}")).await?;
    Ok(payload.thread)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_message_is_shown_verbatim() {
        let err = ApiError::Backend("Forum not found".to_string());
        assert_eq!(err.to_string(), "Forum not found");
        assert_eq!(ApiError::Network.to_string(), "Network error");
    }

    #[test]
    fn envelope_parses_both_outcomes() {
        let ok: Envelope = serde_json::from_str(r#"{"ok":true,"id":"42"}"#).unwrap();
        assert!(ok.ok);
        assert_eq!(ok.error, None);

        let failed: Envelope = serde_json::from_str(r#"{"ok":false,"error":"Not logged in"}"#).unwrap();
        assert!(!failed.ok);
        assert_eq!(failed.error.as_deref(), Some("Not logged in"));

        // A body with no `ok` at all is treated as a failure.
        let bare: Envelope = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!bare.ok);
    }

    #[test]
    fn query_values_are_percent_encoded() {
        assert_eq!(encode("severus snape"), "severus%20snape");
        assert_eq!(encode("a&b=c"), "a%26b%3Dc");
    }
}
