//! Public landing page.

use courseware::Course;
use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::public_header::PublicHeader;
use crate::net::api;
use crate::util::remote::{self, Remote};

/// Courses featured on the landing page.
const FEATURED: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let courses = RwSignal::new(Remote::<Vec<Course>>::Loading);
    Effect::new(move || remote::load(courses, "featured courses", api::list_courses()));

    let featured = move || {
        courses.with(|c| {
            let mut list = c.ready().cloned().unwrap_or_default();
            list.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
            list.truncate(FEATURED);
            list
        })
    };

    view! {
        <PublicHeader/>
        <main class="home-page">
            <section class="hero">
                <h1>"Learn anything, at your own pace"</h1>
                <p>"Courses, quizzes, live sessions, and an AI study partner in one place."</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/courses">"Browse courses"</a>
                    <a class="btn" href="/auth/signup">"Create a free account"</a>
                </div>
            </section>
            <section class="featured">
                <h2>"Top rated"</h2>
                <div class="course-grid">
                    {move || featured().into_iter().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                </div>
            </section>
        </main>
    }
}
