//! Application Shell
//!
//! Explicit per-page dispatch: every server-rendered template declares
//! its page in `<body data-page="...">` and the matching controller
//! component is mounted. No landmark sniffing.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::SiteHeader;
use crate::pages::{
    CharactersPage, CommunityPage, ComposePage, IndexPage, MyForumsPage, RegisterPage,
    ThreadViewPage,
};
use crate::store::AppState;

/// The pages this bundle knows how to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Index,
    MyForums,
    Community,
    ThreadView,
    Compose,
    Characters,
    Register,
}

impl Page {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "index" => Some(Page::Index),
            "forum" => Some(Page::MyForums),
            "community" => Some(Page::Community),
            "viewthread" => Some(Page::ThreadView),
            "createforum" => Some(Page::Compose),
            "characters" => Some(Page::Characters),
            "register" => Some(Page::Register),
            _ => None,
        }
    }

    /// Read the entry point the current document declares.
    pub fn detect() -> Option<Self> {
        let body = document().body()?;
        let name = body.get_attribute("data-page")?;
        Self::from_name(&name)
    }
}

#[component]
pub fn App(page: Page) -> impl IntoView {
    provide_context(Store::new(AppState::default()));

    view! {
        <SiteHeader page=page/>
        {match page {
            Page::Index => view! { <IndexPage/> }.into_any(),
            Page::MyForums => view! { <MyForumsPage/> }.into_any(),
            Page::Community => view! { <CommunityPage/> }.into_any(),
            Page::ThreadView => view! { <ThreadViewPage/> }.into_any(),
            Page::Compose => view! { <ComposePage/> }.into_any(),
            Page::Characters => view! { <CharactersPage/> }.into_any(),
            Page::Register => view! { <RegisterPage/> }.into_any(),
        }}
    }
}
