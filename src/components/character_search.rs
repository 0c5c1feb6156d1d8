//! Character Search
//!
//! Incremental search over the character directory for the compose page.
//! Clicking a result toggles it in the selection basket; an empty query
//! hides the result panel rather than matching everything.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::directory;
use crate::models::Character;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CharacterSearch() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);

    let toggle = move |id: String| {
        store.basket().update(|basket| basket.toggle(&id));
    };

    let results = move || -> AnyView {
        let query = query.get();
        let query = query.trim();
        if !open.get() || query.is_empty() {
            return ().into_any();
        }

        let characters = store.characters().get();
        if characters.is_empty() {
            return view! {
                <div class="character-search-result-item empty-search-result">
                    "No characters available. "
                    <a href="/addcharacter">"Add a character"</a>
                    " to get started."
                </div>
            }
            .into_any();
        }

        let matches: Vec<Character> = directory::search(&characters, query).cloned().collect();
        if matches.is_empty() {
            return view! {
                <div class="character-search-result-item empty-search-result">
                    {format!("No characters found matching \"{query}\"")}
                </div>
            }
            .into_any();
        }

        let basket = store.basket().get();
        matches
            .into_iter()
            .map(|character| {
                let id = character.id.clone();
                let selected = basket.contains(&id);
                view! {
                    <div
                        class=if selected {
                            "character-search-result-item selected"
                        } else {
                            "character-search-result-item"
                        }
                        // mousedown so the input keeps focus and the panel
                        // stays open for multi-select.
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            toggle(id.clone());
                        }
                    >
                        <div class="character-result-name">{character.name}</div>
                        <div class="character-result-nickname">
                            {format!("Nickname: {}", character.nickname)}
                        </div>
                        <div class="character-result-fandom">
                            {format!("Fandom: {}", character.fandom)}
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="character-search-container">
            <input
                type="text"
                id="character-search-input"
                placeholder="Search your characters..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_query.set(input.value());
                    set_open.set(true);
                }
                on:focus=move |_| set_open.set(true)
                on:blur=move |_| set_open.set(false)
            />
            <div class="character-search-results">{results}</div>
        </div>
    }
}
