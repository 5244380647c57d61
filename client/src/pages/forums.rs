//! Course discussion forum and thread pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sorting and search run on the backend. Votes toggle server-side (a repeat
//! vote removes it), so every vote, reply, and best-answer mark re-fetches
//! the affected view instead of adjusting counts locally.

#[cfg(test)]
#[path = "forums_test.rs"]
mod forums_test;

use courseware::forum::{
    Author, Forum, ForumPost, ForumThread, NewPost, NewThread, ThreadSort, VotableType, VoteRequest, VoteType,
};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::http::ApiError;
use crate::state::auth::AuthState;
use crate::util::notify::alert;
use crate::util::remote::{self, Remote, status_text};
use crate::util::{markdown, nav, time};

/// Counters shown under a thread title.
fn thread_meta(thread: &ForumThread) -> String {
    format!(
        "{} replies · {} views · score {}",
        thread.replies_count,
        thread.views_count,
        thread.score()
    )
}

/// Only the thread author may pick the best answer, and only once per post.
fn can_mark_best(thread: &ForumThread, post: &ForumPost, user_id: Option<&str>) -> bool {
    user_id == Some(thread.user_id.as_str()) && !post.is_best_answer
}

/// Thread list for a forum: search results when `query` is set, otherwise
/// sorted.
async fn fetch_threads(forum_id: String, sort: ThreadSort, query: String) -> Result<Vec<ForumThread>, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        api::forum_threads(&forum_id, sort).await
    } else {
        api::search_forum(&forum_id, query).await
    }
}

/// Send a vote and run `then` once the backend has applied it.
fn cast_vote<F>(auth: RwSignal<AuthState>, votable_type: VotableType, votable_id: String, vote_type: VoteType, then: F)
where
    F: Fn() + 'static,
{
    let Some(user_id) = auth.get_untracked().user_id() else {
        return;
    };
    remote::spawn(async move {
        let vote = VoteRequest {
            user_id,
            votable_type,
            votable_id,
            vote_type,
        };
        match api::vote(&vote).await {
            Ok(outcome) => {
                log::debug!("vote {:?} {:?}", outcome.action, outcome.vote_type);
                then();
            }
            Err(e) => alert(&format!("Vote failed: {e}")),
        }
    });
}

#[component]
pub fn ForumPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let course_id = move || params.read().get("course_id").unwrap_or_default();

    let forum = RwSignal::new(Remote::<Forum>::Loading);
    let threads = RwSignal::new(Remote::<Vec<ForumThread>>::Loading);
    let sort = RwSignal::new(ThreadSort::default());
    let query = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let posting = RwSignal::new(false);

    Effect::new(move || {
        let id = course_id();
        remote::load(forum, "course forum", async move { api::course_forum(&id).await });
    });
    Effect::new(move || {
        reload.track();
        let Some(forum_id) = forum.with(|f| f.ready().map(|f| f.id.clone())) else {
            return;
        };
        remote::load(threads, "forum threads", fetch_threads(forum_id, sort.get(), query.get()));
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(user_id), Some(forum_id)) = (
            auth.get_untracked().user_id(),
            forum.with_untracked(|f| f.ready().map(|f| f.id.clone())),
        ) else {
            return;
        };
        let thread = match NewThread::new(&forum_id, &user_id, &title.get_untracked(), &content.get_untracked()) {
            Ok(thread) => thread,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        posting.set(true);
        remote::spawn(async move {
            match api::create_thread(&thread).await {
                Ok(_) => {
                    title.set(String::new());
                    content.set(String::new());
                    info.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(e) => info.set(format!("Could not post thread: {e}")),
            }
            posting.set(false);
        });
    };

    view! {
        <div class="forum-page">
            <header class="page-header">
                <h1>{move || forum.with(|f| f.ready().map_or_else(|| "Discussion".to_owned(), |f| f.title.clone()))}</h1>
                <p>{move || forum.with(|f| f.ready().and_then(|f| f.description.clone()).unwrap_or_default())}</p>
            </header>
            {move || forum.with(|f| status_text(f, "forum")).map(|text| view! { <p class="page-status">{text}</p> })}
            <div class="forum-toolbar">
                <input
                    class="input"
                    type="search"
                    placeholder="Search threads..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select class="input" on:change=move |ev| sort.set(ThreadSort::from_param(&event_target_value(&ev)))>
                    {ThreadSort::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_param() selected=move || sort.get() == s>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || threads.with(|t| status_text(t, "threads")).map(|text| view! { <p class="page-status">{text}</p> })}
            <ul class="thread-list">
                {move || {
                    threads
                        .with(|t| t.ready_or(Vec::new()))
                        .into_iter()
                        .map(|thread| {
                            let href = format!("/dashboard/forums/thread/{}", thread.id);
                            let author = Author::display_name(thread.author.as_ref()).to_owned();
                            let when = time::date_or(thread.last_activity_at.as_deref().or(thread.created_at.as_deref()), "");
                            let up_id = thread.id.clone();
                            let down_id = thread.id.clone();
                            view! {
                                <li class="thread-row">
                                    <div class="vote-box">
                                        <button class="btn btn--icon" title="Upvote" on:click=move |_| {
                                            cast_vote(auth, VotableType::Thread, up_id.clone(), VoteType::Upvote, move || reload.update(|n| *n += 1));
                                        }>"▲"</button>
                                        <span>{thread.score()}</span>
                                        <button class="btn btn--icon" title="Downvote" on:click=move |_| {
                                            cast_vote(auth, VotableType::Thread, down_id.clone(), VoteType::Downvote, move || reload.update(|n| *n += 1));
                                        }>"▼"</button>
                                    </div>
                                    <div class="thread-row__body">
                                        <a class="thread-row__title" href=href>{thread.title.clone()}</a>
                                        {thread.has_best_answer.then(|| view! { <span class="tag tag--success">"Answered"</span> })}
                                        <p class="thread-row__meta">{format!("{author} · {when} · {}", thread_meta(&thread))}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <form class="thread-form" on:submit=on_create>
                <h2>"Start a discussion"</h2>
                <input
                    class="input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="input"
                    rows="5"
                    placeholder="What would you like to ask or share?"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || posting.get()>"Post thread"</button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}

#[component]
pub fn ThreadPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let thread_id = move || params.read().get("id").unwrap_or_default();

    let thread = RwSignal::new(Remote::<ForumThread>::Loading);
    let reload = RwSignal::new(0_u32);
    let reply = RwSignal::new(String::new());
    let posting = RwSignal::new(false);

    Effect::new(move || {
        reload.track();
        let id = thread_id();
        remote::load(thread, "thread", async move { api::thread(&id).await });
    });
    let refresh = move || reload.update(|n| *n += 1);

    let on_reply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let post = match NewPost::new(&thread_id(), &user_id, &reply.get_untracked()) {
            Ok(post) => post,
            Err(message) => {
                alert(message);
                return;
            }
        };
        posting.set(true);
        remote::spawn(async move {
            match api::reply(&post).await {
                Ok(_) => {
                    reply.set(String::new());
                    refresh();
                }
                Err(e) => alert(&format!("Could not post reply: {e}")),
            }
            posting.set(false);
        });
    };

    let on_best = move |post_id: String| {
        let id = thread_id();
        remote::spawn(async move {
            match api::mark_best_answer(&post_id, &id).await {
                Ok(()) => refresh(),
                Err(e) => alert(&format!("Could not mark best answer: {e}")),
            }
        });
    };

    view! {
        <div class="thread-page">
            <button class="btn btn--ghost" on:click=move |_| nav::back()>"← Back"</button>
            {move || thread.with(|t| status_text(t, "thread")).map(|text| view! { <p class="page-status">{text}</p> })}
            {move || {
                thread.with(|t| t.ready().cloned()).map(|t| {
                    let user_id = auth.get().user_id();
                    let author = Author::display_name(t.author.as_ref()).to_owned();
                    let body = markdown::render(&t.content);
                    let up_id = t.id.clone();
                    let down_id = t.id.clone();
                    let posts = t
                        .posts
                        .iter()
                        .map(|post| {
                            let markable = can_mark_best(&t, post, user_id.as_deref());
                            let post_author = Author::display_name(post.author.as_ref()).to_owned();
                            let when = time::date_or(post.created_at.as_deref(), "");
                            let html = markdown::render(&post.content);
                            let up = post.id.clone();
                            let down = post.id.clone();
                            let best = post.id.clone();
                            view! {
                                <article class="post" class:post--best=post.is_best_answer>
                                    <div class="vote-box">
                                        <button class="btn btn--icon" on:click=move |_| cast_vote(auth, VotableType::Post, up.clone(), VoteType::Upvote, refresh)>"▲"</button>
                                        <span>{post.score()}</span>
                                        <button class="btn btn--icon" on:click=move |_| cast_vote(auth, VotableType::Post, down.clone(), VoteType::Downvote, refresh)>"▼"</button>
                                    </div>
                                    <div class="post__body">
                                        <p class="post__meta">{format!("{post_author} · {when}")}</p>
                                        {post.is_best_answer.then(|| view! { <span class="tag tag--success">"Best answer"</span> })}
                                        <div class="markdown" inner_html=html></div>
                                        {markable.then(|| view! {
                                            <button class="btn btn--ghost" on:click=move |_| on_best(best.clone())>"Mark as best answer"</button>
                                        })}
                                    </div>
                                </article>
                            }
                        })
                        .collect_view();
                    view! {
                        <article class="thread">
                            <div class="vote-box">
                                <button class="btn btn--icon" on:click=move |_| cast_vote(auth, VotableType::Thread, up_id.clone(), VoteType::Upvote, refresh)>"▲"</button>
                                <span>{t.score()}</span>
                                <button class="btn btn--icon" on:click=move |_| cast_vote(auth, VotableType::Thread, down_id.clone(), VoteType::Downvote, refresh)>"▼"</button>
                            </div>
                            <div class="thread__body">
                                <h1>{t.title.clone()}</h1>
                                <p class="thread__meta">{format!("{author} · {}", thread_meta(&t))}</p>
                                <div class="markdown" inner_html=body></div>
                            </div>
                        </article>
                        <section class="post-list">
                            <h2>{format!("{} replies", t.posts.len())}</h2>
                            {posts}
                        </section>
                    }
                })
            }}
            <form class="reply-form" on:submit=on_reply>
                <textarea
                    class="input"
                    rows="4"
                    placeholder="Write a reply (markdown supported)"
                    prop:value=move || reply.get()
                    on:input=move |ev| reply.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || posting.get()>"Reply"</button>
            </form>
        </div>
    }
}
