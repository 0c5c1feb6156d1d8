//! Site Header
//!
//! Global header chrome with the site-wide search box. Submitting
//! navigates to the community page with the term reflected into `?q=`,
//! so search results are shareable links.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::Page;
use crate::dom;

/// Only the community page shows its own `?q=` back in the box; other
/// pages (e.g. the character gallery) use `q` for their own filters.
fn initial_term(page: Page, query: Option<String>) -> String {
    match page {
        Page::Community => query.unwrap_or_default(),
        _ => String::new(),
    }
}

#[component]
pub fn SiteHeader(page: Page) -> impl IntoView {
    let (term, set_term) = signal(initial_term(page, dom::query_param("q")));

    let submit = move || {
        let term = term.get();
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        dom::navigate(&dom::community_search_url(term));
    };

    view! {
        <header class="site-header">
            <a class="site-logo" href="/">"FanForum"</a>
            <nav class="site-nav">
                <a href="/forum">"My Forums"</a>
                <a href="/community">"Community"</a>
                <a href="/characters">"Characters"</a>
            </nav>
            <div class="search-bar">
                <input
                    type="text"
                    class="search-bar-input"
                    placeholder="Search community..."
                    prop:value=move || term.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_term.set(input.value());
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
                <button
                    type="button"
                    class="search-bar-btn"
                    on:click=move |_| submit()
                >
                    "Search"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_community_page_prefills_the_header_search() {
        let q = Some("harry".to_string());
        assert_eq!(initial_term(Page::Community, q.clone()), "harry");
        assert_eq!(initial_term(Page::Characters, q.clone()), "");
        assert_eq!(initial_term(Page::MyForums, q), "");
        assert_eq!(initial_term(Page::Community, None), "");
    }
}
