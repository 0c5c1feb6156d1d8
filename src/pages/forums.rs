//! My Forums Page
//!
//! Management table for the user's own threads: status filter tabs,
//! title search, and per-row edit/delete actions. Filtering and search
//! are server-side; the effect refetches whenever either changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::dom;
use crate::models::{ForumStatus, ForumSummary};

const FILTERS: [(&str, &str); 3] = [("all", "All"), ("draft", "Drafts"), ("published", "Published")];

#[component]
pub fn MyForumsPage() -> impl IntoView {
    let (filter, set_filter) = signal("all".to_string());
    let (search, set_search) = signal(String::new());
    let (reload, set_reload) = signal(0u32);
    let (forums, set_forums) = signal(Vec::<ForumSummary>::new());

    Effect::new(move |_| {
        reload.track();
        let filter = filter.get();
        let q = search.get();
        spawn_local(async move {
            let status = match filter.as_str() {
                "draft" | "published" => Some(filter.as_str()),
                _ => None,
            };
            let q = q.trim();
            let q = (!q.is_empty()).then_some(q);
            match api::my_forums(status, q).await {
                Ok(list) => {
                    let _ = set_forums.try_set(list);
                }
                Err(ApiError::Backend(msg)) => dom::alert(&format!("Error loading forums: {msg}")),
                Err(ApiError::Network) => dom::alert("Network error loading forums"),
            }
        });
    });

    let delete = move |id: String| {
        if !dom::confirm("Delete this forum? This cannot be undone.") {
            return;
        }
        spawn_local(async move {
            match api::delete_forum(&id).await {
                Ok(()) => {
                    let _ = set_reload.try_update(|r| *r += 1);
                }
                Err(ApiError::Backend(msg)) => dom::alert(&msg),
                Err(ApiError::Network) => dom::alert("Network error deleting forum"),
            }
        });
    };

    let drafts = move || {
        forums
            .get()
            .iter()
            .filter(|f| f.status == ForumStatus::Draft)
            .count()
    };
    let published = move || {
        forums
            .get()
            .iter()
            .filter(|f| f.status == ForumStatus::Published)
            .count()
    };

    let filter_tabs = move || {
        let active = filter.get();
        FILTERS
            .iter()
            .map(|&(value, label)| {
                let is_active = active == value;
                view! {
                    <button
                        type="button"
                        class=if is_active { "filter-tab active" } else { "filter-tab" }
                        on:click=move |_| set_filter.set(value.to_string())
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let rows = move || {
        let list = forums.get();
        if list.is_empty() {
            return view! {
                <tr>
                    <td colspan="7" class="empty-message">
                        "No forums found. " <a href="/createforum">"Create one"</a> "?"
                    </td>
                </tr>
            }
            .into_any();
        }
        list.into_iter()
            .map(|forum| {
                let edit_id = forum.id.clone();
                let delete_id = forum.id.clone();
                let status_class = match forum.status {
                    ForumStatus::Draft => "status-badge draft",
                    ForumStatus::Published => "status-badge published",
                };
                view! {
                    <tr>
                        <td class="forum-icon">"\u{1f4c1}"</td>
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
                        <td>
                            <span class=status_class>{forum.status.label()}</span>
                        </td>
                        <td>{dom::format_date(forum.created_at.as_deref().unwrap_or(""))}</td>
                        <td class="forum-actions">
                            <button
                                type="button"
                                class="btn-edit"
                                on:click=move |_| dom::navigate(
                                    &format!("/createforum?edit={edit_id}"),
                                )
                            >
                                "Edit"
                            </button>
                            <button
                                type="button"
                                class="btn-delete"
                                on:click=move |_| delete(delete_id.clone())
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <main class="my-forums-page">
            <div class="page-header">
                <h1>"My Forums"</h1>
                <a href="/createforum" class="btn-create">"+ New Forum"</a>
            </div>

            <div class="stats-row">
                <div class="stat-card">
                    <span class="stat-number">{move || forums.get().len()}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{drafts}</span>
                    <span class="stat-label">"Drafts"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{published}</span>
                    <span class="stat-label">"Published"</span>
                </div>
            </div>

            <div class="forums-toolbar">
                <div class="filter-tabs">{filter_tabs}</div>
                <input
                    type="search"
                    class="forums-search"
                    placeholder="Search my forums..."
                    prop:value=search
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_search.set(input.value());
                    }
                />
            </div>

            <table class="forums-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Title"</th>
                        <th>"Author"</th>
                        <th>"Posts"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody id="forums-table-body">{rows}</tbody>
            </table>

            <div id="pagination-info">
                {move || {
                    let n = forums.get().len();
                    format!("{n} forum{}", if n == 1 { "" } else { "s" })
                }}
            </div>
        </main>
    }
}
