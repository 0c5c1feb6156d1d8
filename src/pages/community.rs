//! Community Page
//!
//! Read-only listing of all published threads, optionally filtered by
//! the `?q=` term the site header search navigates with.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dom;
use crate::models::ForumSummary;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let query = dom::query_param("q").unwrap_or_default();
    let (forums, set_forums) = signal(Vec::<ForumSummary>::new());

    let fetch_query = query.clone();
    Effect::new(move |_| {
        let q = fetch_query.clone();
        spawn_local(async move {
            match api::published_forums(Some(q.trim())).await {
                Ok(list) => {
                    let _ = set_forums.try_set(list);
                }
                Err(err) => web_sys::console::error_1(
                    &format!("Failed to load community threads: {err}").into(),
                ),
            }
        });
    });

    // Newest first, regardless of wire order; ISO timestamps compare
    // lexically.
    let rows = move || {
        let mut list = forums.get();
        list.sort_by(|a, b| b.published_date().cmp(a.published_date()));
        if list.is_empty() {
            return view! {
                <tr>
                    <td colspan="5" class="empty-message">"No published forums found."</td>
                </tr>
            }
            .into_any();
        }
        list.into_iter()
            .map(|forum| {
                view! {
                    <tr>
                        <td class="forum-icon">"\u{1f4ac}"</td>
                        <td class="forum-title">
                            <a href=format!("/viewthread/{}", forum.id)>
                                {if forum.title.trim().is_empty() {
                                    "Untitled".to_string()
                                } else {
                                    forum.title.clone()
                                }}
                            </a>
                        </td>
                        <td>{forum.op_nickname().to_string()}</td>
                        <td>{forum.post_count}</td>
                        <td>{dom::format_date(forum.published_date())}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let heading = if query.is_empty() {
        "Community Forums".to_string()
    } else {
        format!("Search results for \"{query}\"")
    };

    view! {
        <main class="community-page">
            <div class="page-header">
                <h1>{heading}</h1>
                <span id="forum-count">
                    {move || {
                        let n = forums.get().len();
                        format!("{n} forum{}", if n == 1 { "" } else { "s" })
                    }}
                </span>
            </div>

            <table class="forums-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Title"</th>
                        <th>"Author"</th>
                        <th>"Posts"</th>
                        <th>"Published"</th>
                    </tr>
                </thead>
                <tbody id="community-table-body">{rows}</tbody>
            </table>
        </main>
    }
}
