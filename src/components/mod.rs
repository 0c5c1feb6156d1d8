//! UI Components
//!
//! Reusable Leptos components.

mod character_search;
mod post_editor;
mod preview_modal;
mod selected_tags;
mod site_header;

pub use character_search::CharacterSearch;
pub use post_editor::PostEditorCard;
pub use preview_modal::PreviewModal;
pub use selected_tags::SelectedTags;
pub use site_header::SiteHeader;
