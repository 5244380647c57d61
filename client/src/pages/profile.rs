//! Profile editing and saved bookmarks.
//!
//! Only changed fields are sent; an unchanged form saves nothing. The saved
//! profile replaces the one held in [`AuthState`] so the sidebar and greeting
//! pick up a new name immediately.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use courseware::enrollment::Bookmark;
use courseware::user::{ProfileUpdate, UserProfile, UserRole};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::notify::alert;
use crate::util::remote::{self, Remote, status_text};
use crate::util::time;

pub(crate) fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "Student",
        UserRole::Instructor => "Instructor",
        UserRole::Admin => "Administrator",
        UserRole::Unknown => "Member",
    }
}

/// Result line after pressing save.
fn save_outcome(update: &ProfileUpdate) -> Option<&'static str> {
    update.is_empty().then_some("Nothing to save.")
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let full_name = RwSignal::new(String::new());
    let institution = RwSignal::new(String::new());
    let about = RwSignal::new(String::new());
    let interests = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let bookmarks = RwSignal::new(Remote::<Vec<Bookmark>>::Loading);
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        let Some(profile) = auth.with(|a| a.profile.clone()) else {
            return;
        };
        full_name.set(profile.full_name.clone().unwrap_or_default());
        institution.set(profile.institution.clone().unwrap_or_default());
        about.set(profile.about.clone().unwrap_or_default());
        interests.set(profile.interests.join(", "));
    });

    Effect::new(move || {
        reload.track();
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        remote::load(bookmarks, "bookmarks", async move { api::bookmarks(&user_id).await });
    });

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let state = auth.get_untracked();
        let (Some(user_id), Some(current)) = (state.user_id(), state.profile.clone()) else {
            return;
        };
        let update = ProfileUpdate::diff(
            &current,
            &full_name.get_untracked(),
            &institution.get_untracked(),
            &about.get_untracked(),
            &interests.get_untracked(),
        );
        if let Some(message) = save_outcome(&update) {
            notice.set(Some(message.to_owned()));
            return;
        }
        saving.set(true);
        remote::spawn(async move {
            match api::update_profile(&user_id, &update).await {
                Ok(saved) => {
                    auth.update(|a| a.profile = Some(saved));
                    notice.set(Some("Profile saved.".to_owned()));
                }
                Err(e) => notice.set(Some(format!("Could not save: {e}"))),
            }
            saving.set(false);
        });
    };

    let delete_bookmark = move |bookmark_id: String| {
        remote::spawn(async move {
            if let Err(e) = api::delete_bookmark(&bookmark_id).await {
                alert(&format!("Could not delete the bookmark: {e}"));
            }
            reload.update(|n| *n = n.wrapping_add(1));
        });
    };

    let profile = move || auth.with(|a| a.profile.clone()).unwrap_or_default();

    view! {
        <div class="profile-page">
            <header class="page-header profile-header">
                <span class="avatar">
                    {move || {
                        let p = profile();
                        match p.avatar_url.clone().filter(|u| !u.is_empty()) {
                            Some(src) => view! { <img src=src alt=""/> }.into_any(),
                            None => view! { <span>{p.initials()}</span> }.into_any(),
                        }
                    }}
                </span>
                <div>
                    <h1>{move || auth.get().display_name()}</h1>
                    <p class="muted">
                        {move || {
                            let p = profile();
                            format!(
                                "{} · {} · joined {}",
                                role_label(p.role),
                                p.email.clone().unwrap_or_default(),
                                time::date_or(p.created_at.as_deref(), "-"),
                            )
                        }}
                    </p>
                </div>
            </header>

            <form class="form" on:submit=save>
                <label>
                    "Full name"
                    <input prop:value=move || full_name.get() on:input=move |ev| full_name.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Institution"
                    <input prop:value=move || institution.get() on:input=move |ev| institution.set(event_target_value(&ev))/>
                </label>
                <label>
                    "About"
                    <textarea prop:value=move || about.get() on:input=move |ev| about.set(event_target_value(&ev))></textarea>
                </label>
                <label>
                    "Interests (comma separated)"
                    <input prop:value=move || interests.get() on:input=move |ev| interests.set(event_target_value(&ev))/>
                </label>
                {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    "Save profile"
                </button>
            </form>

            <section class="bookmarks">
                <h2>"Bookmarks"</h2>
                {move || bookmarks.with(|b| status_text(b, "bookmarks")).map(|text| view! { <p class="page-status">{text}</p> })}
                <Show when=move || bookmarks.with(|b| b.ready().is_some_and(Vec::is_empty))>
                    <p class="empty">"Bookmark lessons from the course player to find them here."</p>
                </Show>
                <ul>
                    {move || {
                        bookmarks
                            .with(|b| b.ready_or(Vec::new()))
                            .into_iter()
                            .map(|bookmark| {
                                let id = bookmark.id.clone();
                                view! {
                                    <li class="bookmark">
                                        <span>{bookmark.note.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| format!("Lesson {}", bookmark.lesson_id))}</span>
                                        <span class="muted">{time::date_or(bookmark.created_at.as_deref(), "")}</span>
                                        <button class="btn btn--link" on:click=move |_| delete_bookmark(id.clone())>
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
