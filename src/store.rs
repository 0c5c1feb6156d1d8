//! Shared Application State
//!
//! Character directory and selection basket, provided via a reactive
//! store instead of process-wide mutable globals. Pages that do not need
//! characters never read it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::basket::SelectionBasket;
use crate::models::Character;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The user's characters for this page view.
    pub characters: Vec<Character>,
    /// Set once the directory load has finished (even when it resolved
    /// empty), so the UI can tell "still loading" from "no characters".
    pub directory_loaded: bool,
    /// Characters currently selected for the forum being composed.
    pub basket: SelectionBasket,
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
