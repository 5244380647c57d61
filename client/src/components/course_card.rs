//! Catalog card for one course.
//!
//! DESIGN
//! ======
//! Actions are passed in as children so the catalog (enroll, add to cart) and
//! the recommendation list (view, match score) can share the card body.

use courseware::Course;
use courseware::checkout::convert_and_format_price;
use leptos::prelude::*;

#[component]
pub fn CourseCard(course: Course, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let href = format!("/courses/{}", course.id);
    let price = if course.is_free() {
        "Free".to_owned()
    } else {
        convert_and_format_price(course.price)
    };
    let rating = format!("★ {:.1} ({})", course.average_rating, course.review_count);
    let thumbnail = course.thumbnail().map(str::to_owned);
    let title = course.title.clone();

    view! {
        <article class="course-card">
            {thumbnail.map(|src| view! { <img class="course-card__thumb" src=src alt=title.clone()/> })}
            <div class="course-card__body">
                <div class="course-card__tags">
                    <span class="tag">{course.category.clone()}</span>
                    <span class="tag tag--muted">{course.difficulty.clone()}</span>
                </div>
                <a class="course-card__title" href=href>{course.title.clone()}</a>
                <p class="course-card__description">{course.description.clone()}</p>
                <div class="course-card__meta">
                    <span>{course.instructor_name.clone()}</span>
                    <span>{course.duration.clone()}</span>
                    <span>{rating}</span>
                </div>
                <div class="course-card__footer">
                    <span class="course-card__price">{price}</span>
                    {children.map(|children| children())}
                </div>
            </div>
        </article>
    }
}
