//! Character Directory
//!
//! In-memory list of the user's characters for the current page view.
//! Loaded once per page, preferring data the server injected into the
//! template over a round trip to the API, and degrading to an empty list
//! on any failure so dependent UI renders its empty states instead of
//! breaking.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::api;
use crate::models::Character;

/// Current template-injection global set by the server-rendered page.
const INJECTED_KEY: &str = "INIT_CHARACTERS";
/// Older templates used this name; still honored.
const LEGACY_INJECTED_KEY: &str = "CHARACTERS_DATA";

fn injected_under(key: &str) -> Option<Vec<Character>> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let characters: Vec<Character> = serde_wasm_bindgen::from_value(value).ok()?;
    if characters.is_empty() {
        None
    } else {
        Some(characters)
    }
}

/// Load the directory: injected template data first, then the legacy
/// injection global, then `/api/my_characters`. Never fails; an
/// unreachable backend yields an empty directory.
pub async fn load() -> Vec<Character> {
    if let Some(characters) = injected_under(INJECTED_KEY) {
        return characters;
    }
    if let Some(characters) = injected_under(LEGACY_INJECTED_KEY) {
        return characters;
    }
    match api::my_characters().await {
        Ok(characters) => characters,
        Err(err) => {
            web_sys::console::warn_1(&format!("failed to load characters: {err}").into());
            Vec::new()
        }
    }
}

/// Case-insensitive substring search over name, nickname, and fandom.
///
/// Lazy and restartable: every call recomputes from the full list, so the
/// iterator can be dropped early (e.g. a capped suggestion list) without
/// any index bookkeeping. An empty query matches everything here; the
/// search UI hides its result panel for empty queries instead.
pub fn search<'a>(
    characters: &'a [Character],
    query: &str,
) -> impl Iterator<Item = &'a Character> + 'a {
    let query = query.to_lowercase();
    characters.iter().filter(move |c| {
        c.name.to_lowercase().contains(&query)
            || c.nickname.to_lowercase().contains(&query)
            || c.fandom.to_lowercase().contains(&query)
    })
}

/// Look a character up by its backend id.
pub fn find_by_id<'a>(characters: &'a [Character], id: &str) -> Option<&'a Character> {
    characters.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: &str, name: &str, nickname: &str, fandom: &str) -> Character {
        Character {
            id: id.to_string(),
            name: name.to_string(),
            nickname: nickname.to_string(),
            fandom: fandom.to_string(),
            avatar_url: None,
            created_at: None,
        }
    }

    fn sample() -> Vec<Character> {
        vec![
            character("1", "Harry Potter", "TheBoyWhoLived", "Harry Potter"),
            character("2", "Hermione Granger", "BrightestWitch", "Harry Potter"),
            character("3", "Sherlock Holmes", "Detective221B", "Sherlock Holmes"),
            character("4", "Elizabeth Bennet", "LizzyB", "Pride and Prejudice"),
        ]
    }

    fn ids(results: impl Iterator<Item = &'static Character>) -> Vec<&'static str> {
        results.map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn search_matches_each_field_case_insensitively() {
        let chars = Box::leak(Box::new(sample()));
        assert_eq!(ids(search(chars, "hermione")), ["2"]);
        assert_eq!(ids(search(chars, "DETECTIVE")), ["3"]);
        assert_eq!(ids(search(chars, "pride")), ["4"]);
    }

    #[test]
    fn search_returns_exactly_the_matching_subset() {
        let chars = sample();
        let matched: Vec<_> = search(&chars, "harry").collect();
        for c in &chars {
            let expected = c.name.to_lowercase().contains("harry")
                || c.nickname.to_lowercase().contains("harry")
                || c.fandom.to_lowercase().contains("harry");
            assert_eq!(matched.iter().any(|m| m.id == c.id), expected, "{}", c.name);
        }
        // "harry" hits both Harry himself and Hermione via the fandom field.
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn search_is_restartable_and_lazy() {
        let chars = sample();
        let first: Vec<_> = search(&chars, "e").take(1).collect();
        assert_eq!(first.len(), 1);
        // A fresh call recomputes from the full list.
        let full: Vec<_> = search(&chars, "e").collect();
        assert!(full.len() > first.len());
    }

    #[test]
    fn empty_query_matches_all_at_this_layer() {
        let chars = sample();
        assert_eq!(search(&chars, "").count(), chars.len());
    }

    #[test]
    fn no_match_yields_empty() {
        let chars = sample();
        assert_eq!(search(&chars, "gandalf").count(), 0);
    }

    #[test]
    fn find_by_id_resolves() {
        let chars = sample();
        assert_eq!(find_by_id(&chars, "3").map(|c| c.name.as_str()), Some("Sherlock Holmes"));
        assert!(find_by_id(&chars, "99").is_none());
    }
}
