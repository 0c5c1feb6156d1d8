//! Post Editor Card
//!
//! One editor block of the composer: character dropdown fed from the
//! selection basket, the character-settings panel (nickname override and
//! avatar picker, visible only while a character is chosen), and the
//! content textarea. The panel is always in the tree; the `active` class
//! drives visibility, so inputs keep focus while typing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::composer::Composer;
use crate::directory;
use crate::dom;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PostEditorCard(composer: RwSignal<Composer>, key: u32) -> impl IntoView {
    let store = use_app_store();
    // Snapshot of this card's editor; None briefly while unmounting.
    let editor = Memo::new(move |_| composer.with(|c| c.editor(key).cloned()));

    let on_select_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        let value = select.value();
        let characters = store.characters().get_untracked();
        composer.update(|c| c.select_character(key, &value, &characters));
    };

    let remove = move |_| {
        if let Some(Err(err)) = composer.try_update(|c| c.remove_editor(key)) {
            dom::alert(&err.to_string());
        }
    };

    let options = move || {
        let basket = store.basket().get();
        let characters = store.characters().get();
        let current = editor.get().map(|e| e.character_id).unwrap_or_default();
        basket
            .ids()
            .iter()
            .filter_map(|id| directory::find_by_id(&characters, id))
            .map(|character| {
                let id = character.id.clone();
                let label = format!("{} ({})", character.name, character.nickname);
                let selected = id == current;
                view! { <option value=id selected=selected>{label}</option> }
            })
            .collect_view()
    };

    // "Current: <file>" hint for an avatar saved on the post that is not
    // just the character's default.
    let stored_avatar_hint = move || {
        let editor = editor.get()?;
        let characters = store.characters().get();
        let default_avatar = directory::find_by_id(&characters, &editor.character_id)
            .and_then(|c| c.avatar_url.clone());
        editor
            .stored_avatar
            .filter(|stored| Some(stored) != default_avatar.as_ref())
    };

    view! {
        <div class="post-editor-item">
            <div class="post-editor-header">
                <div class="character-select-wrapper">
                    <select class="character-select" required on:change=on_select_change>
                        <option
                            value=""
                            selected=move || {
                                editor.get().map(|e| e.character_id.is_empty()).unwrap_or(true)
                            }
                        >
                            "Select Character"
                        </option>
                        {options}
                    </select>
                </div>
                <button type="button" class="btn-remove-post" on:click=remove>
                    "Remove"
                </button>
            </div>
            <div class=move || {
                let active = editor.get().map(|e| e.settings_active()).unwrap_or(false);
                if active { "character-settings active" } else { "character-settings" }
            }>
                <div class="character-setting-row">
                    <label>"Nickname:"</label>
                    <input
                        type="text"
                        class="character-nickname-input"
                        placeholder="Forum username for this character"
                        prop:value=move || editor.get().map(|e| e.nickname).unwrap_or_default()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            composer.update(|c| c.set_nickname(key, input.value()));
                        }
                    />
                </div>
                <div class="character-setting-row">
                    <label>"Avatar:"</label>
                    <input
                        type="file"
                        class="character-avatar-input"
                        accept="image/*"
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let name =
                                input.files().and_then(|files| files.get(0)).map(|f| f.name());
                            composer.update(|c| c.set_avatar_file(key, name));
                        }
                    />
                    {move || stored_avatar_hint().map(|name| view! {
                        <div class="avatar-current-hint">{format!("Current: {name}")}</div>
                    })}
                </div>
            </div>
            <textarea
                class="post-content-input"
                rows=4
                placeholder="Enter post content..."
                required
                prop:value=move || editor.get().map(|e| e.content).unwrap_or_default()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    composer.update(|c| c.set_content(key, area.value()));
                }
            ></textarea>
        </div>
    }
}
