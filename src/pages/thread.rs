//! Thread View Page
//!
//! Renders a single thread: first post is the OP, replies follow with
//! their floor numbers. Load failures render in-page rather than as a
//! dialog so a dead link still leaves a usable page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::dom;
use crate::models::{Post, ThreadDetail};

#[component]
pub fn ThreadViewPage() -> impl IntoView {
    let (thread, set_thread) = signal(None::<ThreadDetail>);
    let (error, set_error) = signal(None::<String>);

    // No per-thread view tracking on the backend; the counter is cosmetic.
    let views = (js_sys::Math::random() * 500.0) as u32 + 100;

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(id) = dom::last_path_segment() else {
                let _ = set_error.try_set(Some("No thread ID provided.".to_string()));
                return;
            };
            match api::thread(&id).await {
                Ok(detail) => {
                    let _ = set_thread.try_set(Some(detail));
                }
                Err(ApiError::Backend(msg)) => {
                    let _ = set_error.try_set(Some(msg));
                }
                Err(ApiError::Network) => {
                    let _ = set_error.try_set(Some("Error loading thread.".to_string()));
                }
            }
        });
    });

    let title = move || {
        thread
            .get()
            .map(|t| {
                if t.title.trim().is_empty() {
                    "Untitled Thread".to_string()
                } else {
                    t.title
                }
            })
            .unwrap_or_default()
    };

    let replies = move || {
        thread
            .get()
            .map(|t| t.posts.len().saturating_sub(1))
            .unwrap_or(0)
    };

    let posts = move || match (error.get(), thread.get()) {
        (Some(msg), _) => view! { <div class="error-message">{msg}</div> }.into_any(),
        (None, None) => view! { <div class="loading-message">"Loading thread..."</div> }.into_any(),
        (None, Some(detail)) => {
            let date = detail.created_at.clone().unwrap_or_default();
            detail
                .posts
                .iter()
                .enumerate()
                .map(|(index, post)| post_item(index, post, &date))
                .collect_view()
                .into_any()
        }
    };

    view! {
        <main class="thread-page">
            <div class="breadcrumbs">
                <a href="/">"Home"</a>
                " > "
                <a href="/community">"Community"</a>
                " > "
                <span>{title}</span>
            </div>

            <div class="thread-header">
                <h1 id="thread-title">{title}</h1>
                <div class="thread-meta">
                    <span>"Replies: " <span id="thread-replies">{replies}</span></span>
                    <span>"Views: " <span id="thread-views">{views}</span></span>
                    <a
                        href="#"
                        class="copy-link"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            dom::copy_thread_link();
                        }
                    >
                        "Copy Link"
                    </a>
                </div>
            </div>

            <div id="posts-container">{posts}</div>
        </main>
    }
}

fn post_item(index: usize, post: &Post, thread_date: &str) -> impl IntoView {
    let floor = post.floor;
    let is_op = index == 0;
    let nickname = if post.nickname.is_empty() {
        "Anonymous".to_string()
    } else {
        post.nickname.clone()
    };
    let character_line = post.character_name.clone().unwrap_or_default();
    let fandom_line = post.character_fandom.clone().unwrap_or_default();
    let avatar = post.avatar.clone();

    let paragraphs = post
        .content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| view! { <p>{line.to_string()}</p> })
        .collect_view();

    let goto = is_op.then(|| {
        view! {
            <span class="goto-floor">
                "Go to floor: "
                <input
                    type="number"
                    min="1"
                    class="goto-floor-input"
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() != "Enter" {
                            return;
                        }
                        ev.prevent_default();
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        if let Ok(floor) = input.value().trim().parse::<u32>() {
                            dom::go_to_floor(floor);
                        }
                    }
                />
            </span>
        }
    });

    view! {
        <article class="post-item" data-floor=floor.to_string()>
            <aside class="post-sidebar">
                {avatar
                    .map(|url| {
                        view! { <img class="post-avatar" src=url alt=nickname.clone()/> }
                    })}
                <div class="post-author">{nickname}</div>
                <div class="post-character">{character_line}</div>
                <div class="post-fandom">{fandom_line}</div>
            </aside>
            <div class="post-main">
                <header class="post-header">
                    <span class="post-date">{dom::format_date_time(thread_date)}</span>
                    {is_op.then(|| view! { <span class="op-badge">"OP"</span> })}
                    <span class="post-floor">{format!("{floor}#")}</span>
                    {goto}
                </header>
                <div class="post-content">{paragraphs}</div>
                <footer class="post-footer">
                    <button type="button" class="post-action">"Like"</button>
                    <button type="button" class="post-action">"Reply"</button>
                </footer>
            </div>
        </article>
    }
}
