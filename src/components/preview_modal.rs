//! Preview Modal
//!
//! Read-only reconstruction of how the composed thread will look. All
//! user-supplied strings are inserted as text nodes; nothing here ever
//! injects markup from character names, nicknames, or post bodies.

use leptos::prelude::*;

use crate::composer::PreviewPost;

#[component]
pub fn PreviewModal(
    preview: RwSignal<Option<(String, Vec<PreviewPost>)>>,
) -> impl IntoView {
    view! {
        {move || preview.get().map(|(title, posts)| view! {
            <div
                class="preview-modal"
                // Backdrop click closes; clicks inside the box stop here.
                on:click=move |_| preview.set(None)
            >
                <div class="preview-modal-content" on:click=move |ev| ev.stop_propagation()>
                    <div class="preview-modal-header">
                        <h2>"Preview"</h2>
                        <button
                            type="button"
                            class="close-btn"
                            on:click=move |_| preview.set(None)
                        >
                            "\u{d7}"
                        </button>
                    </div>
                    <div class="preview-thread-title">{title}</div>
                    <div class="preview-posts">
                        {posts.into_iter().map(|post| view! {
                            <div class="post-item" data-floor=post.floor.to_string()>
                                <div class="post-sidebar">
                                    <div class="user-avatar">
                                        <img
                                            src=post.avatar.unwrap_or_else(|| {
                                                "https://via.placeholder.com/80".to_string()
                                            })
                                            alt=post.nickname.clone()
                                        />
                                    </div>
                                    <div class="user-name">{post.nickname}</div>
                                    <div class="user-stats">
                                        <div>{format!("Character: {}", post.character_name)}</div>
                                        <div>{format!("Fandom: {}", post.character_fandom)}</div>
                                    </div>
                                </div>
                                <div class="post-content-area">
                                    <div class="post-header">
                                        <span class="post-number">
                                            {format!("{}#", post.floor)}
                                        </span>
                                    </div>
                                    <div class="post-body">
                                        {post
                                            .content
                                            .lines()
                                            .filter(|line| !line.trim().is_empty())
                                            .map(|line| view! { <p>{line.trim().to_string()}</p> })
                                            .collect_view()}
                                    </div>
                                    <div class="post-footer"></div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        })}
    }
}
