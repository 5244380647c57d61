//! Public course catalog with search, category, and difficulty filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full course list once; filtering runs locally on every
//! keystroke. Free courses enroll directly, paid courses go to the cart.
//! Both actions require a signed-in user and send guests to sign in.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use courseware::catalog::{ALL, DIFFICULTIES, distinct_categories};
use courseware::commerce::CartLine;
use courseware::enrollment::EnrollResponse;
use courseware::{Course, CourseFilter, filter_courses};
use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::public_header::PublicHeader;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::nav;
use crate::util::notify::alert;
use crate::util::remote::{self, Remote, status_text};

/// Notice shown after an enrollment call succeeds.
fn enroll_notice(response: &EnrollResponse) -> &'static str {
    if response.already_enrolled() {
        "You are already enrolled in this course."
    } else {
        "Enrolled! Your course is ready in the dashboard."
    }
}

/// Summary line above the result grid.
fn result_summary(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total} courses")
    } else {
        format!("Showing {shown} of {total} courses")
    }
}

/// Enroll the signed-in user and open the lesson player.
pub(crate) fn enroll_and_open(auth: RwSignal<AuthState>, busy: RwSignal<Option<String>>, course_id: String) {
    let Some(user_id) = auth.get_untracked().user_id() else {
        nav::redirect("/auth/signin");
        return;
    };
    busy.set(Some(course_id.clone()));
    remote::spawn(async move {
        match api::enroll(&course_id, &user_id).await {
            Ok(response) => {
                log::debug!("enrolled in {course_id}: {}", response.message);
                alert(enroll_notice(&response));
                nav::redirect(&format!("/dashboard/learn/{course_id}"));
            }
            Err(e) => alert(&format!("Enrollment failed: {e}")),
        }
        busy.set(None);
    });
}

/// Add a course to the signed-in user's cart and refresh the cart badge.
pub(crate) fn add_to_cart(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, busy: RwSignal<Option<String>>, course_id: String) {
    let Some(user_id) = auth.get_untracked().user_id() else {
        nav::redirect("/auth/signin");
        return;
    };
    busy.set(Some(course_id.clone()));
    remote::spawn(async move {
        let line = CartLine {
            user_id: user_id.clone(),
            course_id,
        };
        match api::add_to_cart(&line).await {
            Ok(()) => {
                if let Ok(items) = api::cart(&user_id).await {
                    ui.update(|u| u.cart_count = items.len());
                }
                alert("Added to cart.");
            }
            Err(e) => alert(&format!("Could not add to cart: {e}")),
        }
        busy.set(None);
    });
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let courses = RwSignal::new(Remote::<Vec<Course>>::Loading);
    let filter = RwSignal::new(CourseFilter::default());
    let busy = RwSignal::new(None::<String>);

    Effect::new(move || remote::load(courses, "course list", api::list_courses()));

    let categories = move || courses.with(|c| c.ready().map(|list| distinct_categories(list)).unwrap_or_default());
    let visible = move || {
        courses.with(|c| {
            let list = c.ready().map(Vec::as_slice).unwrap_or_default();
            let f = filter.get();
            filter_courses(list, &f).into_iter().cloned().collect::<Vec<_>>()
        })
    };

    view! {
        <PublicHeader/>
        <div class="catalog-page">
            <header class="page-header">
                <h1>"Explore courses"</h1>
                <p>"Learn from industry experts at your own pace."</p>
            </header>
            <div class="catalog-filters">
                <input
                    class="input"
                    type="search"
                    placeholder="Search courses..."
                    prop:value=move || filter.get().search
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select class="input" on:change=move |ev| filter.update(|f| f.category = event_target_value(&ev))>
                    <option value=ALL>"All categories"</option>
                    {move || categories().into_iter().map(|c| view! { <option value=c.clone()>{c.clone()}</option> }).collect_view()}
                </select>
                <select class="input" on:change=move |ev| filter.update(|f| f.difficulty = event_target_value(&ev))>
                    <option value=ALL>"All levels"</option>
                    {DIFFICULTIES.iter().map(|d| view! { <option value=*d>{*d}</option> }).collect_view()}
                </select>
            </div>
            {move || courses.with(|c| status_text(c, "courses")).map(|text| view! { <p class="page-status">{text}</p> })}
            <Show when=move || courses.with(|c| c.ready().is_some())>
                <p class="catalog-summary">
                    {move || result_summary(visible().len(), courses.with(|c| c.ready().map_or(0, Vec::len)))}
                </p>
                <div class="course-grid">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|course| {
                                let id = course.id.clone();
                                let is_free = course.is_free();
                                let pending = {
                                    let id = id.clone();
                                    move || busy.get().as_deref() == Some(id.as_str())
                                };
                                let on_action = move |_| {
                                    if is_free {
                                        enroll_and_open(auth, busy, id.clone());
                                    } else {
                                        add_to_cart(auth, ui, busy, id.clone());
                                    }
                                };
                                view! {
                                    <CourseCard course=course>
                                        <button class="btn btn--primary" disabled=pending on:click=on_action>
                                            {if is_free { "Enroll free" } else { "Add to cart" }}
                                        </button>
                                    </CourseCard>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <Show when=move || visible().is_empty()>
                    <p class="page-status">"No courses match your filters."</p>
                </Show>
            </Show>
        </div>
    }
}
