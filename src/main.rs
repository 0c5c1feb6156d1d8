//! Fan-Forum Frontend Entry Point

mod api;
mod app;
mod basket;
mod components;
mod composer;
mod directory;
mod dom;
mod models;
mod pages;
mod store;

use app::{App, Page};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    match Page::detect() {
        Some(page) => mount_to_body(move || view! { <App page=page/> }),
        None => {
            web_sys::console::warn_1(&"no recognized data-page on <body>; nothing to mount".into())
        }
    }
}
