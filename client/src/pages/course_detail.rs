//! Public course detail: overview, instructor, and lesson outline.

#[cfg(test)]
#[path = "course_detail_test.rs"]
mod course_detail_test;

use courseware::CourseDetails;
use courseware::checkout::convert_and_format_price;
use courseware::course::format_minutes;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::catalog::{add_to_cart, enroll_and_open};
use crate::components::public_header::PublicHeader;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::remote::{self, Remote, status_text};

/// Primary action offered for a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CourseAction {
    Enroll,
    AddToCart,
}

impl CourseAction {
    /// Free or already purchased courses enroll directly.
    fn for_course(is_free: bool, purchased: bool) -> Self {
        if is_free || purchased { Self::Enroll } else { Self::AddToCart }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Enroll => "Enroll now",
            Self::AddToCart => "Add to cart",
        }
    }
}

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let course_id = move || params.read().get("id").unwrap_or_default();

    let details = RwSignal::new(Remote::<CourseDetails>::Loading);
    let purchased = RwSignal::new(false);
    let busy = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = course_id();
        remote::load(details, "course details", async move { api::course_details(&id).await });
    });
    Effect::new(move || {
        let id = course_id();
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        remote::spawn(async move {
            match api::has_purchased(&user_id, &id).await {
                Ok(owned) => purchased.set(owned),
                Err(e) => log::warn!("purchase check for {id} failed: {e}"),
            }
        });
    });

    let action = move || {
        details.with(|d| d.ready().map(|d| CourseAction::for_course(d.course.is_free(), purchased.get())))
    };
    let on_action = move |_| {
        let id = course_id();
        match action() {
            Some(CourseAction::Enroll) => enroll_and_open(auth, busy, id),
            Some(CourseAction::AddToCart) => add_to_cart(auth, ui, busy, id),
            None => {}
        }
    };

    view! {
        <PublicHeader/>
        <main class="course-detail">
            {move || details.with(|d| status_text(d, "course")).map(|text| view! { <p class="page-status">{text}</p> })}
            {move || {
                details.with(|d| d.ready().cloned()).map(|d| {
                    let lessons = d.ordered_lessons();
                    let total = format_minutes(d.total_minutes());
                    let course = d.course;
                    let price = if course.is_free() { "Free".to_owned() } else { convert_and_format_price(course.price) };
                    view! {
                        <section class="course-detail__hero">
                            <div class="course-card__tags">
                                <span class="tag">{course.category.clone()}</span>
                                <span class="tag tag--muted">{course.difficulty.clone()}</span>
                            </div>
                            <h1>{course.title.clone()}</h1>
                            <p>{course.description.clone()}</p>
                            <div class="course-detail__meta">
                                <span>{format!("★ {:.1} ({} reviews)", course.average_rating, course.review_count)}</span>
                                <span>{format!("{} lessons · {total}", lessons.len())}</span>
                                <span class="course-card__price">{price}</span>
                            </div>
                        </section>
                        <section class="course-detail__instructor">
                            <h2>"Instructor"</h2>
                            <p class="course-detail__instructor-name">{course.instructor_name.clone()}</p>
                            <p>{course.instructor_bio.clone().unwrap_or_default()}</p>
                        </section>
                        <section class="course-detail__outline">
                            <h2>"Course content"</h2>
                            <ol class="lesson-outline">
                                {lessons
                                    .into_iter()
                                    .map(|lesson| {
                                        let minutes = lesson.duration.map(format_minutes).unwrap_or_default();
                                        view! {
                                            <li class="lesson-outline__item">
                                                <span class="tag tag--muted">{lesson.content_type.label()}</span>
                                                <span>{lesson.title}</span>
                                                <span class="lesson-outline__time">{minutes}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ol>
                        </section>
                    }
                })
            }}
            <Show when=move || action().is_some()>
                <button
                    class="btn btn--primary course-detail__cta"
                    disabled=move || busy.get().is_some()
                    on:click=on_action
                >
                    {move || action().map_or("", CourseAction::label)}
                </button>
            </Show>
        </main>
    }
}
