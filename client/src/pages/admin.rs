//! Admin dashboard: platform metrics, course management, user management,
//! and manual badge awards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by instructors and admins; everyone else is sent back to
//! `/dashboard` once auth settles. The backend enforces the same rule, so the
//! guard only spares students a page of 403s.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use courseware::admin::{AdminMetrics, CourseDraft, DraftError, ManagedCourse};
use courseware::catalog::DIFFICULTIES;
use courseware::checkout::{convert_and_format_price, format_inr, usd_to_inr};
use courseware::gamification::Badge;
use courseware::user::UserProfile;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::pages::profile::role_label;
use crate::state::auth::AuthState;
use crate::util::auth::install_admin_guard;
use crate::util::notify::{alert, confirm};
use crate::util::remote::{self, Remote, status_text};
use crate::util::time;

/// Validate the form, parsing the free-text price first.
fn finish_draft(draft: &CourseDraft, price_input: &str) -> Result<CourseDraft, DraftError> {
    let price = CourseDraft::parse_price(price_input)?;
    CourseDraft { price, ..draft.clone() }.validated()
}

/// Display name of `badge_id` among the loaded badges.
fn badge_name(badges: &[Badge], badge_id: &str) -> String {
    badges
        .iter()
        .find(|b| b.id == badge_id)
        .map_or_else(|| "badge".to_owned(), |b| b.name.clone())
}

/// Price input text for an existing course; blank for free courses.
fn price_input(price: f64) -> String {
    if price > 0.0 { format!("{price:.2}") } else { String::new() }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_admin_guard(auth, use_navigate());

    let metrics = RwSignal::new(Remote::<AdminMetrics>::Loading);
    let courses = RwSignal::new(Remote::<Vec<ManagedCourse>>::Loading);
    let users = RwSignal::new(Remote::<Vec<UserProfile>>::Loading);
    let badges = RwSignal::new(Remote::<Vec<Badge>>::Loading);
    let reload = RwSignal::new(0_u32);

    let editing = RwSignal::new(None::<Option<String>>);
    let draft = RwSignal::new(CourseDraft::default());
    let price = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    Effect::new(move || {
        reload.track();
        if !auth.with(AuthState::can_manage_courses) {
            return;
        }
        remote::load(metrics, "admin metrics", api::admin_metrics());
        remote::load(courses, "managed courses", api::managed_courses());
        remote::load(users, "users", api::admin_users());
        remote::load(badges, "badges", api::badges());
    });

    let bump = move || reload.update(|n| *n = n.wrapping_add(1));

    let open_form = move |course: Option<&ManagedCourse>| {
        match course {
            Some(managed) => {
                draft.set(CourseDraft::from_course(&managed.course));
                price.set(price_input(managed.course.price));
                editing.set(Some(Some(managed.course.id.clone())));
            }
            None => {
                draft.set(CourseDraft {
                    difficulty: DIFFICULTIES[0].to_owned(),
                    ..CourseDraft::default()
                });
                price.set(String::new());
                editing.set(Some(None));
            }
        }
        form_error.set(None);
    };

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let ready = match draft.with_untracked(|d| finish_draft(d, &price.get_untracked())) {
            Ok(ready) => ready,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        saving.set(true);
        remote::spawn(async move {
            let result = match target.as_deref() {
                Some(course_id) => api::update_course(course_id, &ready).await,
                None => api::create_course(&ready).await,
            };
            match result {
                Ok(course) => {
                    log::info!("saved course {}", course.id);
                    editing.set(None);
                    bump();
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let delete_course = move |course_id: String, title: String| {
        if !confirm(&format!("Delete \"{title}\"? Enrollments and progress are removed too.")) {
            return;
        }
        remote::spawn(async move {
            match api::delete_course(&course_id).await {
                Ok(ack) => log::info!("delete course {course_id}: {}", ack.message),
                Err(e) => alert(&format!("Could not delete the course: {e}")),
            }
            bump();
        });
    };

    let delete_user = move |user_id: String, name: String| {
        if auth.get_untracked().user_id().as_deref() == Some(user_id.as_str()) {
            alert("You cannot delete your own account here.");
            return;
        }
        if !confirm(&format!("Delete the account of {name}?")) {
            return;
        }
        remote::spawn(async move {
            match api::delete_user(&user_id).await {
                Ok(ack) => log::info!("delete user {user_id}: {}", ack.message),
                Err(e) => alert(&format!("Could not delete the user: {e}")),
            }
            bump();
        });
    };

    let award_badge = move |user_id: String, name: String, badge_id: String| {
        if badge_id.is_empty() {
            alert("Pick a badge to award first.");
            return;
        }
        let badge = badges.with_untracked(|b| badge_name(b.ready().map_or(&[][..], Vec::as_slice), &badge_id));
        remote::spawn(async move {
            match api::award_badge(&user_id, &badge_id).await {
                Ok(outcome) => {
                    log::info!("award badge {badge_id} to {user_id}: {}", outcome.message);
                    alert(&outcome.notice(&badge, &name));
                }
                Err(e) => alert(&format!("Could not award the badge: {e}")),
            }
        });
    };

    let metric = move |pick: fn(&AdminMetrics) -> String| {
        Signal::derive(move || metrics.with(|m| m.ready().map(pick).unwrap_or_else(|| "-".to_owned())))
    };

    let text_field = move |label: &'static str, get: fn(&CourseDraft) -> String, set: fn(&mut CourseDraft, String)| {
        view! {
            <label>
                {label}
                <input
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| set(d, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Admin"</h1>
            </header>

            {move || metrics.with(|m| status_text(m, "metrics")).map(|text| view! { <p class="page-status">{text}</p> })}
            <section class="stat-grid">
                <StatCard label="Users" value=metric(|m| m.total_users.to_string())/>
                <StatCard label="Courses" value=metric(|m| m.total_courses.to_string())/>
                <StatCard label="Enrollments" value=metric(|m| m.total_enrollments.to_string())/>
                <StatCard label="Active students" value=metric(|m| m.active_students.to_string())/>
                <StatCard label="Revenue" value=metric(|m| format_inr(usd_to_inr(m.revenue)))/>
                <StatCard label="Avg. completion" value=metric(|m| format!("{}%", m.avg_completion_rate))/>
                <StatCard label="Enrollments / course" value=metric(AdminMetrics::enrollments_per_course)/>
            </section>

            <section class="admin-courses">
                <header class="section-header">
                    <h2>"Courses"</h2>
                    <button class="btn btn--primary" on:click=move |_| open_form(None)>
                        "New course"
                    </button>
                </header>

                <Show when=move || editing.with(Option::is_some)>
                    <form class="form course-form" on:submit=save>
                        <h3>{move || if editing.with(|e| matches!(e, Some(Some(_)))) { "Edit course" } else { "New course" }}</h3>
                        {text_field("Title", |d| d.title.clone(), |d, v| d.title = v)}
                        <label>
                            "Description"
                            <textarea
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.description = value);
                                }
                            ></textarea>
                        </label>
                        {text_field("Category", |d| d.category.clone(), |d, v| d.category = v)}
                        <label>
                            "Difficulty"
                            <select
                                prop:value=move || draft.with(|d| d.difficulty.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.difficulty = value);
                                }
                            >
                                {DIFFICULTIES.iter().map(|level| view! { <option value=*level>{*level}</option> }).collect_view()}
                            </select>
                        </label>
                        {text_field("Duration", |d| d.duration.clone(), |d, v| d.duration = v)}
                        <label>
                            "Price (USD, blank for free)"
                            <input inputmode="decimal" prop:value=move || price.get() on:input=move |ev| price.set(event_target_value(&ev))/>
                        </label>
                        {text_field("Instructor name", |d| d.instructor_name.clone(), |d, v| d.instructor_name = v)}
                        {text_field("Instructor bio", |d| d.instructor_bio.clone(), |d, v| d.instructor_bio = v)}
                        {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <div class="form-actions">
                            <button class="btn" type="button" on:click=move |_| editing.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </Show>

                {move || courses.with(|c| status_text(c, "courses")).map(|text| view! { <p class="page-status">{text}</p> })}
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th>"Level"</th>
                            <th>"Price"</th>
                            <th>"Enrollments"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            courses
                                .with(|c| c.ready_or(Vec::new()))
                                .into_iter()
                                .map(|managed| {
                                    let course = managed.course.clone();
                                    let price_text = if course.is_free() { "Free".to_owned() } else { convert_and_format_price(course.price) };
                                    let (id, title) = (course.id.clone(), course.title.clone());
                                    view! {
                                        <tr>
                                            <td>{course.title.clone()}</td>
                                            <td>{course.category.clone()}</td>
                                            <td>{course.difficulty.clone()}</td>
                                            <td>{price_text}</td>
                                            <td>{managed.enrollments}</td>
                                            <td class="table__actions">
                                                <button class="btn btn--link" on:click=move |_| open_form(Some(&managed))>
                                                    "Edit"
                                                </button>
                                                <button class="btn btn--link btn--danger" on:click=move |_| delete_course(id.clone(), title.clone())>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="admin-users">
                <h2>"Users"</h2>
                {move || users.with(|u| status_text(u, "users")).map(|text| view! { <p class="page-status">{text}</p> })}
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Joined"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .with(|u| u.ready_or(Vec::new()))
                                .into_iter()
                                .map(|user| {
                                    let (id, name) = (user.id.clone(), user.display_name().to_owned());
                                    let (award_id, award_name) = (id.clone(), name.clone());
                                    let picked = RwSignal::new(String::new());
                                    view! {
                                        <tr>
                                            <td>{user.display_name().to_owned()}</td>
                                            <td>{user.email.clone().unwrap_or_default()}</td>
                                            <td>{role_label(user.role)}</td>
                                            <td>{time::date_or(user.created_at.as_deref(), "-")}</td>
                                            <td class="table__actions">
                                                <select
                                                    aria-label="Badge"
                                                    prop:value=move || picked.get()
                                                    on:change=move |ev| picked.set(event_target_value(&ev))
                                                >
                                                    <option value="">"Badge..."</option>
                                                    {move || {
                                                        badges
                                                            .with(|b| b.ready_or(Vec::new()))
                                                            .into_iter()
                                                            .map(|badge| view! { <option value=badge.id.clone()>{badge.name.clone()}</option> })
                                                            .collect_view()
                                                    }}
                                                </select>
                                                <button
                                                    class="btn btn--link"
                                                    on:click=move |_| award_badge(award_id.clone(), award_name.clone(), picked.get_untracked())
                                                >
                                                    "Award"
                                                </button>
                                                <button class="btn btn--link btn--danger" on:click=move |_| delete_user(id.clone(), name.clone())>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
