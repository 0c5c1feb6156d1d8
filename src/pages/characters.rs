//! Characters Page
//!
//! Card gallery of the user's characters. The search box debounces and
//! then navigates with `?q=`, so filtered views are shareable links and
//! the filter itself is applied from the URL on load.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

use crate::directory;
use crate::dom;
use crate::store::{use_app_store, AppStateStoreFields};

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn CharactersPage() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        spawn_local(async move {
            let characters = directory::load().await;
            let _ = store.characters().try_set(characters);
            let _ = store.directory_loaded().try_set(true);
        });
    });

    let query = dom::query_param("q").unwrap_or_default();
    let (generation, set_generation) = signal(0u32);

    let filter_query = query.clone();
    let filtered = Memo::new(move |_| {
        let characters = store.characters().get();
        directory::search(&characters, filter_query.trim())
            .cloned()
            .collect::<Vec<_>>()
    });

    // Debounced: only the newest keystroke's timer is allowed to navigate.
    let on_search = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let term = input.value();
        let generation_at_keystroke = generation.get_untracked() + 1;
        set_generation.set(generation_at_keystroke);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_untracked() != Some(generation_at_keystroke) {
                return;
            }
            let term = term.trim();
            if term.is_empty() {
                dom::navigate("/characters");
            } else {
                dom::navigate(&format!(
                    "/characters?q={}",
                    utf8_percent_encode(term, NON_ALPHANUMERIC)
                ));
            }
        });
    };

    let cards = move || {
        if !store.directory_loaded().get() {
            return view! { <div class="loading-message">"Loading characters..."</div> }
                .into_any();
        }
        let list = filtered.get();
        if list.is_empty() {
            return view! {
                <div class="empty-message">
                    "No characters found. " <a href="/addcharacter">"Add a character"</a>
                    " to get started!"
                </div>
            }
            .into_any();
        }
        list.into_iter()
            .map(|character| {
                let created = character.created_at.as_deref().unwrap_or("");
                view! {
                    <div class="character-card">
                        {character
                            .avatar_url
                            .clone()
                            .map(|url| {
                                view! {
                                    <img
                                        class="character-card-avatar"
                                        src=url
                                        alt=character.name.clone()
                                    />
                                }
                            })}
                        <h3 class="character-card-name">{character.name.clone()}</h3>
                        <div class="character-card-nickname">{character.nickname.clone()}</div>
                        <div class="character-card-fandom">{character.fandom.clone()}</div>
                        <div class="character-card-date">{dom::format_date(created)}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let heading = if query.is_empty() {
        "My Characters".to_string()
    } else {
        format!("Characters matching \"{query}\"")
    };

    view! {
        <main class="characters-page">
            <div class="page-header">
                <h1>{heading}</h1>
                <span id="character-count">
                    {move || {
                        let n = filtered.get().len();
                        format!("{n} character{}", if n == 1 { "" } else { "s" })
                    }}
                </span>
            </div>

            <input
                type="search"
                class="character-page-search"
                placeholder="Search characters..."
                prop:value=query.clone()
                on:input=on_search
            />

            <div class="character-grid">{cards}</div>
        </main>
    }
}
