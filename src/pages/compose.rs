//! Create / Edit Forum Page
//!
//! The composer controller: loads the character directory, then (in edit
//! mode) reconstructs the saved forum, and wires the search, basket,
//! post editors, preview, and save actions together.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::components::{CharacterSearch, PostEditorCard, PreviewModal, SelectedTags};
use crate::composer::{Composer, PreviewPost};
use crate::directory;
use crate::dom;
use crate::models::{ForumDraft, ForumStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ComposePage() -> impl IntoView {
    let store = use_app_store();
    let composer = RwSignal::new(Composer::new());
    let preview = RwSignal::new(None::<(String, Vec<PreviewPost>)>);
    let (editing, set_editing) = signal(false);

    // Load the directory, then reconstruct the forum when editing. One
    // awaited sequence: the edit rebuild can only run after characters
    // are available, and each request is bounded by the API timeout.
    Effect::new(move |_| {
        spawn_local(async move {
            let characters = directory::load().await;
            let have_characters = !characters.is_empty();
            let _ = store.characters().try_set(characters);
            let _ = store.directory_loaded().try_set(true);

            let Some(edit_id) = dom::query_param("edit") else {
                return;
            };
            let _ = set_editing.try_set(true);
            if !have_characters {
                dom::alert("Failed to load characters. Please refresh the page.");
                return;
            }

            match api::my_forum(&edit_id).await {
                Ok(forum) => {
                    let characters = store.characters().get_untracked();
                    let mut basket = crate::basket::SelectionBasket::new();
                    let _ = composer.try_update(|c| basket = c.load_forum(&forum, &characters));
                    let _ = store.basket().try_set(basket);
                }
                Err(ApiError::Backend(msg)) => {
                    dom::alert(&msg);
                    dom::navigate("/forum");
                }
                Err(ApiError::Network) => {
                    dom::alert("Network error loading forum for edit");
                    dom::navigate("/forum");
                }
            }
        });
    });

    // Every basket change reconciles the editors' dropdown selections.
    Effect::new(move |_| {
        let basket = store.basket().get();
        let _ = composer.try_update(|c| c.resync_selection(&basket));
    });

    let add_post = move |_| {
        if store.characters().get_untracked().is_empty() {
            web_sys::console::warn_1(&"No characters available. Please add characters first.".into());
            return;
        }
        composer.update(|c| {
            c.add_editor();
        });
    };

    let save = move |status: ForumStatus| {
        let characters = store.characters().get_untracked();
        let snapshot = composer.get_untracked();
        let posts = match snapshot.validate(&characters) {
            Ok(posts) => posts,
            Err(err) => {
                dom::alert(&err.to_string());
                return;
            }
        };
        let payload = ForumDraft {
            id: snapshot.editing_id.clone(),
            title: snapshot.title.trim().to_string(),
            status,
            posts,
        };
        spawn_local(async move {
            match api::save_forum(&payload).await {
                Ok(id) => {
                    // The backend accepted the draft; drop the editing
                    // marker and hand over to the canonical view.
                    let _ = composer.try_update(|c| c.editing_id = None);
                    dom::navigate(&format!("/viewthread/{id}"));
                }
                Err(ApiError::Backend(msg)) => dom::alert(&format!("Error saving forum: {msg}")),
                Err(ApiError::Network) => dom::alert("Network error saving forum"),
            }
        });
    };

    let save_draft = move |_| {
        if store.characters().get_untracked().is_empty() {
            dom::alert("Please add characters first before creating a forum!");
            return;
        }
        save(ForumStatus::Draft);
    };

    let publish = move |_| {
        if store.characters().get_untracked().is_empty() {
            dom::alert("Please add characters first before publishing a forum!");
            return;
        }
        if dom::confirm(
            "Are you sure you want to publish this forum? It will be visible to all users in the community.",
        ) {
            save(ForumStatus::Published);
        }
    };

    let show_preview = move |_| {
        let characters = store.characters().get_untracked();
        let snapshot = composer.get_untracked();
        match snapshot.preview(&characters) {
            Ok(posts) => preview.set(Some((snapshot.title.trim().to_string(), posts))),
            Err(err) => dom::alert(&err.to_string()),
        }
    };

    view! {
        <main class="auth-box create-forum-box">
            <div class="auth-box-header">
                <h2>{move || if editing.get() { "Edit Forum" } else { "Create Forum" }}</h2>
                <p>{move || {
                    if editing.get() {
                        "Edit your forum dialogue"
                    } else {
                        "Compose a dialogue between your characters"
                    }
                }}</p>
            </div>
            <form id="create-forum-form" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                <div class="form-row">
                    <label for="forum-title">"Forum Title:"</label>
                    <input
                        type="text"
                        id="forum-title"
                        placeholder="Enter forum title..."
                        prop:value=move || composer.with(|c| c.title.clone())
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            composer.update(|c| c.title = value);
                        }
                    />
                </div>

                <div class="character-selection-section">
                    <SelectedTags/>
                    <CharacterSearch/>
                </div>

                <div id="posts-container">
                    <For
                        each=move || {
                            composer.with(|c| c.editors().iter().map(|e| e.key).collect::<Vec<_>>())
                        }
                        key=|key| *key
                        children=move |key| view! { <PostEditorCard composer=composer key=key/> }
                    />
                </div>

                <button type="button" id="add-post-btn" class="btn-add-post" on:click=add_post>
                    "+ Add Post"
                </button>

                <div class="form-actions">
                    <button type="button" id="preview-btn" on:click=show_preview>
                        "Preview"
                    </button>
                    <button type="button" id="save-draft-btn" on:click=save_draft>
                        "Save Draft"
                    </button>
                    <button type="button" id="publish-btn" on:click=publish>
                        "Publish"
                    </button>
                </div>
            </form>

            <PreviewModal preview=preview/>
        </main>
    }
}
