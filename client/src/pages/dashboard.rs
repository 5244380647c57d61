//! Student dashboard: summary tiles, enrolled courses, upcoming sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. The summary comes from the backend; the
//! enrollment list is read straight from the `enrollments` table with the
//! course row embedded, so progress bars reflect the latest lesson writes.
//! When the summary or analytics endpoints fail, their numbers are derived
//! from that list instead.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use courseware::enrollment::{StudentAnalytics, StudentSummary};
use courseware::live::LiveSession;
use courseware::Enrollment;
use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::stat_card::StatCard;
use crate::net::http::ApiError;
use crate::net::{api, supabase};
use crate::state::auth::AuthState;
use crate::util::remote::{self, Remote, status_text};
use crate::util::time;

/// Sessions shown in the "coming up" panel.
const UPCOMING_LIMIT: usize = 3;

/// Label of the button that opens an enrollment's lesson player.
fn resume_label(enrollment: &Enrollment) -> &'static str {
    if enrollment.is_completed() {
        "Review"
    } else if enrollment.progress_percentage > 0 {
        "Continue"
    } else {
        "Start"
    }
}

/// Backend value when it arrived, else the locally derived one.
fn with_local_fallback<T>(fetched: Result<T, ApiError>, local: Option<T>, what: &str) -> Remote<T> {
    match (fetched, local) {
        (Ok(value), _) => Remote::Ready(value),
        (Err(e), Some(local)) => {
            log::warn!("{what} unavailable, using enrollment counts: {e}");
            Remote::Ready(local)
        }
        (Err(e), None) => Remote::from_result(Err(e), what),
    }
}

/// Enrollments of `user_id`, newest first, with their courses embedded.
pub(crate) async fn fetch_enrollments(user_id: &str, token: Option<&str>) -> Result<Vec<Enrollment>, ApiError> {
    supabase::select(
        "enrollments",
        "*,courses(*)",
        &[("user_id", supabase::eq(user_id)), ("order", "enrolled_at.desc".to_owned())],
        token,
    )
    .await
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let summary = RwSignal::new(Remote::<StudentSummary>::Loading);
    let enrollments = RwSignal::new(Remote::<Vec<Enrollment>>::Loading);
    let upcoming = RwSignal::new(Remote::<Vec<LiveSession>>::Loading);
    let analytics = RwSignal::new(Remote::<StudentAnalytics>::Loading);

    Effect::new(move || {
        let state = auth.get();
        let Some(user_id) = state.user_id() else {
            return;
        };
        let token = state.token();
        remote::spawn(async move {
            let listed = fetch_enrollments(&user_id, token.as_deref()).await;
            let local_summary = listed.as_ref().ok().map(|list| StudentSummary::from_enrollments(list));
            let local_mix = listed.as_ref().ok().map(|list| StudentAnalytics {
                category_distribution: StudentAnalytics::category_distribution(list),
                ..StudentAnalytics::default()
            });
            enrollments.set(Remote::from_result(listed, "enrollments"));
            summary.set(with_local_fallback(api::student_summary(&user_id).await, local_summary, "dashboard summary"));
            analytics.set(with_local_fallback(api::student_analytics(&user_id).await, local_mix, "learning analytics"));
        });
        remote::load(upcoming, "upcoming sessions", api::upcoming_sessions(UPCOMING_LIMIT));
    });

    let stat = move |pick: fn(&StudentSummary) -> i64| move || summary.with(|s| s.ready().map_or(0, pick).to_string());

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>{move || format!("Welcome back, {}", auth.get().display_name())}</h1>
            </header>
            <section class="stat-grid">
                <StatCard label="Enrolled" value=Signal::derive(stat(|s| s.total_courses))/>
                <StatCard label="Completed" value=Signal::derive(stat(|s| s.completed_courses))/>
                <StatCard label="In progress" value=Signal::derive(stat(|s| s.in_progress))/>
                <StatCard label="Certificates" value=Signal::derive(stat(|s| s.certificates_earned))/>
                <StatCard label="Study hours" value=Signal::derive(stat(|s| s.total_study_hours))/>
                <StatCard label="Day streak" value=Signal::derive(stat(|s| s.current_streak))/>
            </section>
            <section class="dashboard-page__courses">
                <h2>"My courses"</h2>
                {move || enrollments.with(|e| status_text(e, "your courses")).map(|text| view! { <p class="page-status">{text}</p> })}
                <Show when=move || enrollments.with(|e| e.ready().is_some_and(Vec::is_empty))>
                    <p class="page-status">
                        "You have not enrolled in any courses yet. "
                        <a href="/courses">"Browse the catalog"</a>
                    </p>
                </Show>
                <div class="enrollment-list">
                    {move || {
                        enrollments
                            .with(|e| e.ready_or(Vec::new()))
                            .into_iter()
                            .map(|enrollment| {
                                let href = format!("/dashboard/learn/{}", enrollment.course_id);
                                let percent = enrollment.progress_percentage;
                                let label = resume_label(&enrollment);
                                let last = time::date_or(enrollment.last_accessed.as_deref(), "never");
                                view! {
                                    <article class="enrollment-card">
                                        <h3>{enrollment.course_title().to_owned()}</h3>
                                        <ProgressBar percent=percent label=true/>
                                        <div class="enrollment-card__footer">
                                            <span class="enrollment-card__meta">{format!("Last opened {last}")}</span>
                                            <a class="btn btn--primary" href=href>{label}</a>
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
            <section class="dashboard-page__mix">
                <h2>"Your learning mix"</h2>
                {move || analytics.with(|a| status_text(a, "learning analytics")).map(|text| view! { <p class="page-status">{text}</p> })}
                <Show when=move || analytics.with(|a| a.ready().is_some_and(|a| a.category_distribution.is_empty()))>
                    <p class="muted">"Enroll in a course to see your category breakdown."</p>
                </Show>
                <ul class="category-mix">
                    {move || {
                        analytics.with(|a| {
                            a.ready()
                                .map(|a| {
                                    a.category_shares()
                                        .into_iter()
                                        .map(|(name, share)| (name.to_owned(), share))
                                        .collect::<Vec<_>>()
                                })
                                .unwrap_or_default()
                        })
                        .into_iter()
                        .map(|(name, share)| view! {
                            <li class="category-mix__row">
                                <span>{name}</span>
                                <ProgressBar percent=share label=true/>
                            </li>
                        })
                        .collect_view()
                    }}
                </ul>
            </section>
            <section class="dashboard-page__upcoming">
                <h2>"Coming up live"</h2>
                {move || {
                    upcoming
                        .with(|u| u.ready_or(Vec::new()))
                        .into_iter()
                        .map(|session| {
                            let when = session.scheduled_start.as_deref().map(time::format_datetime).unwrap_or_default();
                            view! {
                                <div class="session-row">
                                    <span class="session-row__title">{session.title.clone()}</span>
                                    <span class="session-row__course">{session.course_title().to_owned()}</span>
                                    <span class="session-row__time">{when}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <a href="/dashboard/live">"All live sessions"</a>
            </section>
        </div>
    }
}
