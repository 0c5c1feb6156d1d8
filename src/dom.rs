//! Browser Utilities
//!
//! Small wrappers over window/document: dialogs, clipboard, navigation,
//! query params, and the go-to-floor jump. Lookups that miss simply
//! no-op; a missing landmark means the feature is not on this page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::{document, window};
use leptos::task::spawn_local;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, UrlSearchParams};

pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Full page navigation; this app has no client-side router.
pub fn navigate(href: &str) {
    let _ = window().location().set_href(href);
}

/// Value of one query parameter of the current page URL.
pub fn query_param(name: &str) -> Option<String> {
    let search = window().location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|v| !v.is_empty())
}

/// Last path segment of the current URL, used by `/viewthread/:id`.
pub fn last_path_segment() -> Option<String> {
    let path = window().location().pathname().ok()?;
    path.split('/')
        .filter(|s| !s.is_empty())
        .last()
        .map(str::to_string)
}

/// Shareable community search link for a query term.
pub fn community_search_url(term: &str) -> String {
    format!("/community?q={}", utf8_percent_encode(term, NON_ALPHANUMERIC))
}

/// Copy text to the clipboard and confirm with a dialog.
pub fn copy_to_clipboard(text: String, confirmation: &'static str) {
    let clipboard = window().navigator().clipboard();
    spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => alert(confirmation),
            Err(err) => web_sys::console::error_2(&"Failed to copy:".into(), &err),
        }
    });
}

/// Copy the current page URL (the canonical thread link).
pub fn copy_thread_link() {
    if let Ok(href) = window().location().href() {
        copy_to_clipboard(href, "Thread link copied to clipboard!");
    }
}

/// Scroll the post with the given floor into view and flash it.
pub fn go_to_floor(floor: u32) {
    let selector = format!(".post-item[data-floor=\"{floor}\"]");
    let Ok(Some(element)) = document().query_selector(&selector) else {
        alert(&format!("Floor {floor} not found"));
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("background-color", "#fff3cd");
        spawn_local(async move {
            TimeoutFuture::new(2_000).await;
            let _ = style.remove_property("background-color");
        });
    }
}

/// Locale-formatted date for listing rows; empty input stays empty.
pub fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    js_sys::Date::new(&iso.into())
        .to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Locale-formatted date and time for post headers.
pub fn format_date_time(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    js_sys::Date::new(&iso.into())
        .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
