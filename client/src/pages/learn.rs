//! Lesson player and progress tracking for one enrolled course.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the enrollment, lessons, modules, and `lesson_progress` rows straight
//! from the database accessor. Completing a lesson updates the outline at
//! once, then upserts the `lesson_progress` row and patches the enrollment's
//! percentage, `completed_at`, and `last_accessed`.
//!
//! ERROR HANDLING
//! ==============
//! Persistence failures are logged and reported with an alert. The local
//! check-mark is kept; the page and the database disagree until the next
//! reload.

#[cfg(test)]
#[path = "learn_test.rs"]
mod learn_test;

use courseware::course::{Module, group_by_module};
use courseware::enrollment::NewBookmark;
use courseware::progress::LessonCompletion;
use courseware::{CourseProgress, Enrollment, EnrollmentProgressUpdate, Lesson, LessonKind, LessonProgress};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::progress_bar::ProgressBar;
use crate::net::http::ApiError;
use crate::net::{api, supabase};
use crate::state::auth::AuthState;
use crate::util::notify::alert;
use crate::util::remote::{self, Remote, status_text};
use crate::util::{markdown, time};

/// Everything the player needs for one enrollment.
#[derive(Clone, Debug, PartialEq)]
struct Player {
    enrollment: Enrollment,
    modules: Vec<Module>,
    progress: CourseProgress,
}

/// Embeddable player URL for YouTube and Vimeo links; other URLs play in a
/// plain `<video>` element and yield `None`.
fn embed_url(url: &str) -> Option<String> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?
        .trim_start_matches("www.");
    if let Some(query) = rest.strip_prefix("youtube.com/watch?") {
        let id = query.split('&').find_map(|pair| pair.strip_prefix("v="))?;
        return (!id.is_empty()).then(|| format!("https://www.youtube.com/embed/{id}"));
    }
    if rest.starts_with("youtube.com/embed/") || rest.starts_with("player.vimeo.com/") {
        return Some(url.to_owned());
    }
    if let Some(id) = rest.strip_prefix("youtu.be/") {
        let id = id.split(['?', '&']).next().unwrap_or_default();
        return (!id.is_empty()).then(|| format!("https://www.youtube.com/embed/{id}"));
    }
    let id = rest.strip_prefix("vimeo.com/")?;
    (!id.is_empty() && id.chars().all(|c| c.is_ascii_digit())).then(|| format!("https://player.vimeo.com/video/{id}"))
}

/// "Lesson 3 of 10" for the lesson at `lesson_id`.
fn position_label(lessons: &[Lesson], lesson_id: &str) -> String {
    lessons
        .iter()
        .position(|lesson| lesson.id == lesson_id)
        .map(|index| format!("Lesson {} of {}", index + 1, lessons.len()))
        .unwrap_or_default()
}

async fn load_player(course_id: String, user_id: String, token: Option<String>) -> Result<Option<Player>, ApiError> {
    let token = token.as_deref();
    let enrollments: Vec<Enrollment> = supabase::select(
        "enrollments",
        "*,courses(*)",
        &[("user_id", supabase::eq(&user_id)), ("course_id", supabase::eq(&course_id))],
        token,
    )
    .await?;
    let Some(enrollment) = enrollments.into_iter().next() else {
        return Ok(None);
    };
    let by_course = [("course_id", supabase::eq(&course_id)), ("order", "order_index.asc".to_owned())];
    let lessons: Vec<Lesson> = supabase::select("lessons", "*", &by_course, token).await?;
    let modules: Vec<Module> = supabase::select("modules", "*", &by_course, token).await?;
    let rows: Vec<LessonProgress> =
        supabase::select("lesson_progress", "*", &[("enrollment_id", supabase::eq(&enrollment.id))], token).await?;
    Ok(Some(Player {
        progress: CourseProgress::new(lessons, &rows),
        enrollment,
        modules,
    }))
}

/// Write the completion row, then the enrollment aggregate.
async fn persist_completion(
    completion: LessonCompletion,
    update: EnrollmentProgressUpdate,
    token: Option<String>,
) -> Result<(), ApiError> {
    let token = token.as_deref();
    let enrollment_id = completion.enrollment_id.clone();
    supabase::upsert::<_, serde_json::Value>("lesson_progress", "enrollment_id,lesson_id", &completion, token).await?;
    supabase::update::<_, serde_json::Value>("enrollments", &[("id", supabase::eq(&enrollment_id))], &update, token).await?;
    Ok(())
}

#[component]
pub fn LearnPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let course_id = move || params.read().get("course_id").unwrap_or_default();

    let player = RwSignal::new(Remote::<Option<Player>>::Loading);
    let current = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = auth.get();
        let Some(user_id) = state.user_id() else {
            return;
        };
        let id = course_id();
        let token = state.token();
        remote::spawn(async move {
            let loaded = Remote::from_result(load_player(id, user_id, token).await, "lesson player");
            if let Some(Some(p)) = loaded.ready() {
                let first = p.progress.next_incomplete().or_else(|| p.progress.lessons().first());
                current.set(first.map(|lesson| lesson.id.clone()));
            }
            player.set(loaded);
        });
    });

    let lesson = move || {
        let id = current.get()?;
        player.with(|p| p.ready()?.as_ref()?.progress.lessons().iter().find(|l| l.id == id).cloned())
    };

    let mark_complete = move |lesson_id: String| {
        let now = time::now_iso();
        let mut outcome = None;
        player.update(|remote| {
            if let Remote::Ready(Some(p)) = remote {
                outcome = Some(p.progress.mark_complete(&lesson_id, &now).map(|update| {
                    update.map(|update| {
                        p.enrollment.progress_percentage = update.progress_percentage;
                        p.enrollment.completed_at.clone_from(&update.completed_at);
                        p.enrollment.last_accessed = Some(update.last_accessed.clone());
                        (update, p.enrollment.id.clone(), p.progress.next_after(&lesson_id).map(|l| l.id.clone()))
                    })
                }));
            }
        });
        match outcome {
            Some(Ok(Some((update, enrollment_id, next)))) => {
                if next.is_some() {
                    current.set(next);
                }
                let completion = LessonCompletion {
                    enrollment_id,
                    lesson_id,
                    completed: true,
                    completed_at: now,
                };
                let token = auth.get_untracked().token();
                remote::spawn(async move {
                    if let Err(e) = persist_completion(completion, update, token).await {
                        log::error!("saving lesson progress failed: {e}");
                        alert(&format!("Your progress could not be saved: {e}"));
                    }
                });
            }
            Some(Ok(None)) => log::debug!("lesson {lesson_id} already complete"),
            Some(Err(e)) => log::error!("{e}"),
            None => {}
        }
    };

    let on_bookmark = move |lesson_id: String| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        remote::spawn(async move {
            let bookmark = NewBookmark {
                user_id,
                lesson_id,
                note: None,
            };
            match api::add_bookmark(&bookmark).await {
                Ok(_) => alert("Lesson bookmarked."),
                Err(e) => alert(&format!("Could not bookmark lesson: {e}")),
            }
        });
    };

    let percent = Signal::derive(move || {
        player.with(|p| p.ready().and_then(Option::as_ref).map_or(0, |p| p.progress.percentage()))
    });

    view! {
        <div class="learn-page">
            {move || player.with(|p| status_text(p, "course")).map(|text| view! { <p class="page-status">{text}</p> })}
            <Show when=move || player.with(|p| matches!(p, Remote::Ready(None)))>
                <div class="page-status">
                    <p>"You are not enrolled in this course."</p>
                    <a class="btn btn--primary" href=move || format!("/courses/{}", course_id())>"View course"</a>
                </div>
            </Show>
            <Show when=move || player.with(|p| matches!(p, Remote::Ready(Some(_))))>
                <aside class="learn-page__outline">
                    <h2>
                        {move || player.with(|p| p.ready().and_then(Option::as_ref).map(|p| p.enrollment.course_title().to_owned()))}
                    </h2>
                    <ProgressBar percent=percent label=true/>
                    <p class="learn-page__count">
                        {move || {
                            player.with(|p| {
                                p.ready()
                                    .and_then(Option::as_ref)
                                    .map(|p| format!("{} of {} lessons complete", p.progress.completed_count(), p.progress.total()))
                            })
                        }}
                    </p>
                    {move || {
                        let Some(p) = player.with(|p| p.ready().cloned().flatten()) else {
                            return ().into_any();
                        };
                        let selected = current.get();
                        group_by_module(&p.modules, p.progress.lessons())
                            .into_iter()
                            .map(|(module, lessons)| {
                                let heading = module.map_or_else(|| "Lessons".to_owned(), |m| m.title);
                                let items = lessons
                                    .into_iter()
                                    .map(|lesson| {
                                        let done = p.progress.is_completed(&lesson.id);
                                        let active = selected.as_deref() == Some(lesson.id.as_str());
                                        let id = lesson.id.clone();
                                        view! {
                                            <li>
                                                <button
                                                    class="outline-item"
                                                    class:outline-item--active=active
                                                    class:outline-item--done=done
                                                    on:click=move |_| current.set(Some(id.clone()))
                                                >
                                                    <span class="outline-item__check">{if done { "✓" } else { "○" }}</span>
                                                    <span>{lesson.title}</span>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <section class="outline-module">
                                        <h3>{heading}</h3>
                                        <ul>{items}</ul>
                                    </section>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                    <a class="btn btn--ghost" href=move || format!("/dashboard/forums/{}", course_id())>"Course forum"</a>
                </aside>
                <main class="learn-page__player">
                    {move || {
                        let Some(lesson) = lesson() else {
                            return view! { <p class="page-status">"This course has no lessons yet."</p> }.into_any();
                        };
                        let position = player.with(|p| {
                            p.ready().and_then(Option::as_ref).map(|p| position_label(p.progress.lessons(), &lesson.id)).unwrap_or_default()
                        });
                        let done = player.with(|p| p.ready().and_then(Option::as_ref).is_some_and(|p| p.progress.is_completed(&lesson.id)));
                        let complete_id = lesson.id.clone();
                        let bookmark_id = lesson.id.clone();
                        let body = match lesson.content_type {
                            LessonKind::Video => match lesson.video_url.as_deref() {
                                Some(url) => match embed_url(url) {
                                    Some(src) => view! { <iframe class="lesson-video" src=src allowfullscreen=true></iframe> }.into_any(),
                                    None => view! { <video class="lesson-video" src=url.to_owned() controls=true></video> }.into_any(),
                                },
                                None => view! { <p class="page-status">"Video not available."</p> }.into_any(),
                            },
                            LessonKind::Quiz => view! {
                                <p>"Test your knowledge with this course's quizzes."</p>
                                <a class="btn btn--primary" href="/dashboard/quizzes">"Go to quizzes"</a>
                            }
                            .into_any(),
                            LessonKind::Text | LessonKind::Other => {
                                let html = markdown::render(lesson.content.as_deref().unwrap_or_default());
                                view! { <div class="lesson-text" inner_html=html></div> }.into_any()
                            }
                        };
                        view! {
                            <header class="lesson-header">
                                <span class="lesson-header__position">{position}</span>
                                <h1>{lesson.title.clone()}</h1>
                                <span class="tag tag--muted">{lesson.content_type.label()}</span>
                            </header>
                            <div class="lesson-body">{body}</div>
                            <footer class="lesson-actions">
                                <button class="btn btn--ghost" on:click=move |_| on_bookmark(bookmark_id.clone())>"Bookmark"</button>
                                <button
                                    class="btn btn--primary"
                                    disabled=done
                                    on:click=move |_| mark_complete(complete_id.clone())
                                >
                                    {if done { "Completed" } else { "Mark as complete" }}
                                </button>
                            </footer>
                        }
                        .into_any()
                    }}
                </main>
            </Show>
        </div>
    }
}
