//! Home Page
//!
//! Dashboard: activity counters, the user's latest forums by most
//! recent activity, and the five most recently published community
//! threads. Load failures here only degrade the dashboard, so they
//! are logged instead of surfaced.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dom;
use crate::models::ForumSummary;

fn title_or_untitled(forum: &ForumSummary) -> String {
    if forum.title.trim().is_empty() {
        "Untitled".to_string()
    } else {
        forum.title.clone()
    }
}

#[component]
pub fn IndexPage() -> impl IntoView {
    let (forums, set_forums) = signal(Vec::<ForumSummary>::new());
    let (published, set_published) = signal(Vec::<ForumSummary>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::my_forums(None, None).await {
                Ok(list) => {
                    let _ = set_forums.try_set(list);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("Unable to load my forums: {err}").into())
                }
            }
        });
        spawn_local(async move {
            match api::published_forums(None).await {
                Ok(list) => {
                    let _ = set_published.try_set(list);
                }
                Err(err) => web_sys::console::warn_1(
                    &format!("Unable to load published forums: {err}").into(),
                ),
            }
        });
    });

    let total_posts = move || forums.get().iter().map(|f| f.post_count).sum::<u32>();

    // Most recently touched first; ISO timestamps compare lexically.
    let latest = move || {
        let mut list = forums.get();
        list.sort_by(|a, b| b.activity_date().cmp(a.activity_date()));
        list
    };

    let top_published = move || {
        let mut list = published.get();
        list.sort_by(|a, b| b.published_date().cmp(a.published_date()));
        list.truncate(5);
        list
    };

    view! {
        <main class="index-page">
            <section class="stats-row">
                <div class="stat-card">
                    <span class="stat-number">{move || forums.get().len()}</span>
                    <span class="stat-label">"My Forums"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{total_posts}</span>
                    <span class="stat-label">"Total Posts"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{move || published.get().len()}</span>
                    <span class="stat-label">"Published"</span>
                </div>
            </section>

            <section class="latest-forums">
                <h2>"My Latest Forums"</h2>
                <div id="latest-forums-list">
                    {move || {
                        let list = latest();
                        if list.is_empty() {
                            view! {
                                <div class="empty-message">
                                    "No forums created yet. "
                                    <a href="/createforum">"Create your first forum"</a>
                                    " to get started!"
                                </div>
                            }
                                .into_any()
                        } else {
                            list.into_iter()
                                .map(|forum| {
                                    let meta = format!(
                                        "{} posts | {} | Created {}",
                                        forum.post_count,
                                        forum.status.label(),
                                        dom::format_date(forum.created_at.as_deref().unwrap_or("")),
                                    );
                                    view! {
                                        <div class="latest-post">
                                            <a href=format!(
                                                "/viewthread/{}",
                                                forum.id,
                                            )>{title_or_untitled(&forum)}</a>
                                            <span class="post-meta">{meta}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </section>

            <section class="community-forums">
                <h2>"Recently Published"</h2>
                <div id="published-forums-list">
                    {move || {
                        let list = top_published();
                        if list.is_empty() {
                            view! {
                                <div class="empty-message">
                                    "No published forums yet. Be the first to publish a forum!"
                                </div>
                            }
                                .into_any()
                        } else {
                            list.into_iter()
                                .map(|forum| {
                                    let meta = format!(
                                        "by {} | {} posts | Published {}",
                                        forum.op_nickname(),
                                        forum.post_count,
                                        dom::format_date(forum.published_date()),
                                    );
                                    view! {
                                        <div class="latest-post">
                                            <a href=format!(
                                                "/viewthread/{}",
                                                forum.id,
                                            )>{title_or_untitled(&forum)}</a>
                                            <span class="post-meta">{meta}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </section>
        </main>
    }
}
