//! Live sessions: schedule, registration, instructor controls, recordings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session list is re-fetched every
//! [`courseware::live::POLL_INTERVAL_MS`] while the page is mounted so
//! status changes made by instructors show up without a reload.
//! Registration and lifecycle transitions re-fetch immediately.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use courseware::course::Course;
use courseware::forum::Author;
use courseware::live::{
    AttendeeRegistration, LiveSession, LiveSessionFilter, NewLiveSession, SessionAttendee, SessionStatus,
};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::api::{self, SessionTransition};
use crate::state::auth::AuthState;
use crate::util::notify::alert;
use crate::util::remote::{self, Remote, status_text};
use crate::util::time;

/// Registered head count, with the cap when the session has one.
fn capacity_label(session: &LiveSession) -> String {
    match session.max_participants {
        Some(max) if max > 0 => format!("{} / {max} registered", session.attendees_count),
        _ => format!("{} registered", session.attendees_count),
    }
}

/// Start time and length line for a session card.
fn schedule_label(session: &LiveSession) -> String {
    let start = session
        .scheduled_start
        .as_deref()
        .map_or_else(|| "Time to be announced".to_owned(), time::format_datetime);
    match session.scheduled_end.as_deref() {
        Some(end) => format!("{start} to {}", time::format_datetime(end)),
        None => start,
    }
}

/// One attendee row: name, status, and minutes attended once known.
fn attendee_label(attendee: &SessionAttendee) -> String {
    let name = Author::display_name(attendee.user.as_ref());
    let status = if attendee.status.is_empty() { "registered" } else { attendee.status.as_str() };
    if attendee.duration_minutes > 0 {
        format!("{name} · {status} · {} min", attendee.duration_minutes)
    } else {
        format!("{name} · {status}")
    }
}

/// Attendee panel to show after clicking `clicked`: the same card closes it,
/// any other card opens that one. Only an opened panel starts from
/// `Loading`; poll refreshes keep the shown list until new data lands.
fn next_selection(open: Option<&str>, clicked: &str) -> Option<String> {
    (open != Some(clicked)).then(|| clicked.to_owned())
}

/// Filter built from the dropdown values; empty values mean "all".
fn build_filter(course_id: &str, status: &str, instructor_id: Option<String>) -> LiveSessionFilter {
    LiveSessionFilter {
        course_id: Some(course_id.to_owned()).filter(|id| !id.is_empty()),
        instructor_id,
        status: SessionStatus::from_param(status),
    }
}

#[component]
pub fn LiveSessionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let course_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let mine_only = RwSignal::new(false);
    let reload = RwSignal::new(0_u32);

    let sessions = RwSignal::new(Remote::<Vec<LiveSession>>::Loading);
    let recordings = RwSignal::new(Remote::<Vec<LiveSession>>::Loading);
    let courses = RwSignal::new(Remote::<Vec<Course>>::Loading);
    let registered = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<String>);
    let detail = RwSignal::new(Remote::<LiveSession>::Loading);

    Effect::new(move || remote::load(courses, "courses", api::list_courses()));

    let current_filter = move || {
        let instructor = if mine_only.get() { auth.get().user_id() } else { None };
        build_filter(&course_filter.get(), &status_filter.get(), instructor)
    };

    Effect::new(move || {
        reload.track();
        let filter = current_filter();
        remote::load(sessions, "live sessions", async move { api::live_sessions(&filter).await });
    });
    Effect::new(move || {
        reload.track();
        let course = course_filter.get();
        remote::load(recordings, "recordings", async move {
            api::session_recordings(Some(course.as_str()).filter(|c| !c.is_empty())).await
        });
    });

    Effect::new(move || {
        reload.track();
        let Some(session_id) = selected.get() else {
            return;
        };
        remote::load(detail, "session details", async move { api::live_session(&session_id).await });
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(courseware::live::POLL_INTERVAL_MS))).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                reload.update(|n| *n = n.wrapping_add(1));
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let register = move |session_id: String| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        busy.set(Some(session_id.clone()));
        remote::spawn(async move {
            let registration = AttendeeRegistration {
                session_id: session_id.clone(),
                user_id,
            };
            match api::register_for_session(&registration).await {
                Ok(()) => {
                    registered.update(|ids| ids.push(session_id));
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => alert(&format!("Registration failed: {e}")),
            }
            busy.set(None);
        });
    };

    let transition = move |session_id: String, step: SessionTransition| {
        busy.set(Some(session_id.clone()));
        remote::spawn(async move {
            if let Err(e) = api::transition_session(&session_id, step).await {
                alert(&format!("Could not update the session: {e}"));
            }
            busy.set(None);
            reload.update(|n| *n = n.wrapping_add(1));
        });
    };

    let can_manage = move || auth.get().can_manage_courses();

    view! {
        <div class="live-page">
            <header class="page-header">
                <h1>"Live sessions"</h1>
            </header>
            <section class="filters">
                <select
                    aria-label="Course"
                    prop:value=move || course_filter.get()
                    on:change=move |ev| course_filter.set(event_target_value(&ev))
                >
                    <option value="">"All courses"</option>
                    {move || {
                        courses
                            .with(|c| c.ready_or(Vec::new()))
                            .into_iter()
                            .map(|course| view! { <option value=course.id.clone()>{course.title.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    aria-label="Status"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {SessionStatus::FILTERABLE
                        .into_iter()
                        .map(|status| view! { <option value=status.as_param()>{status.label()}</option> })
                        .collect_view()}
                </select>
                <Show when=can_manage>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || mine_only.get()
                            on:change=move |ev| mine_only.set(event_target_checked(&ev))
                        />
                        "My sessions"
                    </label>
                </Show>
            </section>

            <Show when=can_manage>
                <NewSessionForm courses=courses on_created=move || reload.update(|n| *n = n.wrapping_add(1))/>
            </Show>

            <section class="session-list">
                {move || sessions.with(|s| status_text(s, "live sessions")).map(|text| view! { <p class="page-status">{text}</p> })}
                {move || {
                    let list = sessions.with(|s| s.ready_or(Vec::new()));
                    if list.is_empty() && sessions.with(|s| s.ready().is_some()) {
                        return view! { <p class="empty">"No sessions match these filters."</p> }.into_any();
                    }
                    let me = auth.get().user_id().unwrap_or_default();
                    let managing = auth.get().can_manage_courses();
                    list.into_iter()
                        .map(|session| {
                            let id = session.id.clone();
                            let is_registered = session.is_registered(&me) || registered.with(|r| r.contains(&id));
                            let in_flight = {
                                let id = id.clone();
                                move || busy.get().as_deref() == Some(id.as_str())
                            };
                            let (reg_id, start_id, end_id, cancel_id) = (id.clone(), id.clone(), id.clone(), id.clone());
                            let (toggle_id, open_id) = (id.clone(), id.clone());
                            let is_open = move || selected.with(|s| s.as_deref() == Some(open_id.as_str()));
                            view! {
                                <article class="session-card">
                                    <header>
                                        <h3>{session.title.clone()}</h3>
                                        <span class=format!("status status--{}", session.status.as_param())>{session.status.label()}</span>
                                    </header>
                                    <p class="session-card__course">{session.course_title().to_owned()}</p>
                                    <p class="session-card__time">{schedule_label(&session)}</p>
                                    <p class="session-card__capacity">{capacity_label(&session)}</p>
                                    {(!session.description.is_empty()).then(|| view! { <p>{session.description.clone()}</p> })}
                                    <div class="session-card__actions">
                                        {session.join_url().map(|url| view! {
                                            <a class="btn btn--primary" href=url.to_owned() target="_blank" rel="noopener">"Join"</a>
                                        })}
                                        {(session.can_register() && !is_registered).then(|| {
                                            let in_flight = in_flight.clone();
                                            view! {
                                                <button class="btn" disabled=in_flight on:click=move |_| register(reg_id.clone())>
                                                    "Register"
                                                </button>
                                            }
                                        })}
                                        {is_registered.then(|| view! { <span class="tag">"Registered"</span> })}
                                        {(managing && session.can_start()).then(|| {
                                            let in_flight = in_flight.clone();
                                            view! {
                                                <button class="btn" disabled=in_flight on:click=move |_| transition(start_id.clone(), SessionTransition::Start)>
                                                    "Start"
                                                </button>
                                            }
                                        })}
                                        {(managing && session.can_end()).then(|| {
                                            let in_flight = in_flight.clone();
                                            view! {
                                                <button class="btn" disabled=in_flight on:click=move |_| transition(end_id.clone(), SessionTransition::End)>
                                                    "End"
                                                </button>
                                            }
                                        })}
                                        {(managing && session.can_cancel()).then(|| {
                                            view! {
                                                <button class="btn btn--danger" disabled=in_flight on:click=move |_| transition(cancel_id.clone(), SessionTransition::Cancel)>
                                                    "Cancel"
                                                </button>
                                            }
                                        })}
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| {
                                                let next = selected.with_untracked(|s| next_selection(s.as_deref(), &toggle_id));
                                                if next.is_some() {
                                                    detail.set(Remote::Loading);
                                                }
                                                selected.set(next);
                                            }
                                        >
                                            "Attendees"
                                        </button>
                                    </div>
                                    <Show when=is_open>
                                        <div class="session-card__attendees">
                                            {move || detail.with(|d| status_text(d, "attendees")).map(|text| view! { <p class="page-status">{text}</p> })}
                                            <ul>
                                                {move || {
                                                    let attendees = detail.with(|d| d.ready().map(|s| s.attendees.clone()).unwrap_or_default());
                                                    if attendees.is_empty() && detail.with(|d| d.ready().is_some()) {
                                                        return view! { <li class="muted">"Nobody has registered yet."</li> }.into_any();
                                                    }
                                                    attendees
                                                        .iter()
                                                        .map(|a| view! { <li>{attendee_label(a)}</li> })
                                                        .collect_view()
                                                        .into_any()
                                                }}
                                            </ul>
                                        </div>
                                    </Show>
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>

            <section class="recordings">
                <h2>"Recordings"</h2>
                {move || recordings.with(|r| status_text(r, "recordings")).map(|text| view! { <p class="page-status">{text}</p> })}
                <ul>
                    {move || {
                        recordings
                            .with(|r| r.ready_or(Vec::new()))
                            .into_iter()
                            .filter_map(|session| {
                                let url = session.recording_url.clone().filter(|u| !u.is_empty())?;
                                Some(view! {
                                    <li>
                                        <a href=url target="_blank" rel="noopener">{session.title.clone()}</a>
                                        <span class="muted">
                                            {format!(" {} · {}", session.course_title(), time::date_or(session.scheduled_start.as_deref(), ""))}
                                        </span>
                                    </li>
                                })
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}

/// Scheduling form for instructors and admins.
#[component]
fn NewSessionForm<F>(courses: RwSignal<Remote<Vec<Course>>>, on_created: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let auth = expect_context::<RwSignal<AuthState>>();
    let open = RwSignal::new(false);
    let course_id = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let duration = RwSignal::new(NewLiveSession::DEFAULT_DURATION_MINUTES.to_string());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(instructor_id) = auth.get_untracked().user_id() else {
            return;
        };
        let session = NewLiveSession {
            course_id: course_id.get_untracked(),
            instructor_id,
            title: title.get_untracked().trim().to_owned(),
            description: description.get_untracked().trim().to_owned(),
            scheduled_start: time::local_input_to_iso(&start.get_untracked()),
            duration_minutes: duration.get_untracked().trim().parse().unwrap_or(0),
        };
        if let Err(message) = session.validate() {
            error.set(Some(message.to_owned()));
            return;
        }
        error.set(None);
        saving.set(true);
        remote::spawn(async move {
            match api::create_live_session(&session).await {
                Ok(created) => {
                    log::info!("scheduled live session {}", created.id);
                    title.set(String::new());
                    description.set(String::new());
                    start.set(String::new());
                    open.set(false);
                    on_created();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="new-session">
            <button class="btn" on:click=move |_| open.update(|o| *o = !*o)>
                {move || if open.get() { "Close" } else { "Schedule a session" }}
            </button>
            <Show when=move || open.get()>
                <form class="form" on:submit=submit>
                    <select prop:value=move || course_id.get() on:change=move |ev| course_id.set(event_target_value(&ev))>
                        <option value="">"Select a course"</option>
                        {move || {
                            courses
                                .with(|c| c.ready_or(Vec::new()))
                                .into_iter()
                                .map(|course| view! { <option value=course.id.clone()>{course.title.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    <input placeholder="Title" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <input type="datetime-local" prop:value=move || start.get() on:input=move |ev| start.set(event_target_value(&ev))/>
                    <input
                        type="number"
                        min="1"
                        aria-label="Duration in minutes"
                        prop:value=move || duration.get()
                        on:input=move |ev| duration.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        "Schedule"
                    </button>
                </form>
            </Show>
        </section>
    }
}
