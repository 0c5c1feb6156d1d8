//! Selected Character Tags
//!
//! Visual list of the basket's characters with per-tag removal. Removal
//! goes through the same toggle as selection, so editors resync.

use leptos::prelude::*;

use crate::directory;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SelectedTags() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="selected-characters-tags">
            {move || {
                let basket = store.basket().get();
                if basket.is_empty() {
                    return view! {
                        <p class="empty-message">
                            "No characters selected. Search and click on characters below to add them."
                        </p>
                    }
                    .into_any();
                }

                let characters = store.characters().get();
                basket
                    .ids()
                    .iter()
                    .filter_map(|id| directory::find_by_id(&characters, id))
                    .map(|character| {
                        let id = character.id.clone();
                        view! {
                            <div class="character-tag">
                                <span class="character-tag-name">
                                    {format!("{} ({})", character.name, character.nickname)}
                                </span>
                                <button
                                    type="button"
                                    class="character-tag-remove"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        store.basket().update(|basket| basket.toggle(&id));
                                    }
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
