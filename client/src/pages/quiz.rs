//! Quiz list and attempt flow.
//!
//! DESIGN
//! ======
//! The attempt itself is a `QuizSession` held in one signal; this page only
//! renders its phase and forwards clicks. Submit stays disabled until every
//! question has an answer.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use courseware::quiz::{QuizResult, QuizSummary};
use courseware::{QuizPhase, QuizSession};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::notify::alert;
use crate::util::remote::{self, Remote, status_text};

/// Headline shown with a graded result.
fn result_headline(result: &QuizResult) -> String {
    let verdict = if result.passed { "Passed!" } else { "Not quite." };
    format!(
        "{verdict} {} of {} correct ({}%)",
        result.correct_answers, result.total_questions, result.percentage
    )
}

/// Progress line above the submit button.
fn answered_label(session: &QuizSession) -> String {
    format!("{} of {} answered", session.answered_count(), session.question_count())
}

#[component]
pub fn QuizPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let quizzes = RwSignal::new(Remote::<Vec<QuizSummary>>::Loading);
    let session = RwSignal::new(QuizSession::default());
    let opening = RwSignal::new(false);

    Effect::new(move || remote::load(quizzes, "quiz list", api::quizzes(None)));

    let open_quiz = move |quiz_id: String| {
        if opening.get_untracked() {
            return;
        }
        opening.set(true);
        remote::spawn(async move {
            match api::quiz(&quiz_id).await {
                Ok(detail) => session.set(QuizSession::start(detail)),
                Err(e) => alert(&format!("Could not open quiz: {e}")),
            }
            opening.set(false);
        });
    };

    let on_submit = move |_| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let mut submission = None;
        session.update(|s| submission = s.submit(&user_id).ok());
        let Some(submission) = submission else {
            return;
        };
        remote::spawn(async move {
            match api::submit_quiz(&submission).await {
                Ok(result) => session.update(|s| {
                    if let Err(e) = s.complete(result) {
                        log::error!("{e}");
                    }
                }),
                Err(e) => {
                    session.update(QuizSession::submission_failed);
                    alert(&format!("Submitting your answers failed: {e}"));
                }
            }
        });
    };

    let list_view = move || {
        let list = quizzes.with(|q| q.ready_or(Vec::new()));
        view! {
            <header class="page-header">
                <h1>"Quizzes"</h1>
            </header>
            {quizzes.with(|q| status_text(q, "quizzes")).map(|text| view! { <p class="page-status">{text}</p> })}
            <div class="quiz-list">
                {list
                    .into_iter()
                    .map(|quiz| {
                        let id = quiz.id.clone();
                        view! {
                            <article class="quiz-card">
                                <h3>{quiz.title.clone()}</h3>
                                <p class="quiz-card__course">{quiz.course_name.clone().unwrap_or_default()}</p>
                                <div class="quiz-card__meta">
                                    <span>{format!("{} questions", quiz.questions_count)}</span>
                                    <span>{format!("Pass at {}%", quiz.passing_score)}</span>
                                    <span>{quiz.duration.clone().unwrap_or_default()}</span>
                                </div>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || opening.get()
                                    on:click=move |_| open_quiz(id.clone())
                                >
                                    "Start quiz"
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    let attempt_view = move || {
        let state = session.get();
        let Some(quiz) = state.quiz().cloned() else {
            return ().into_any();
        };
        let submitting = *state.phase() == QuizPhase::Submitted;
        let questions = quiz
            .questions
            .into_iter()
            .enumerate()
            .map(|(number, question)| {
                let chosen = state.answer_for(&question.id);
                let options = question
                    .options
                    .into_iter()
                    .enumerate()
                    .map(|(index, text)| {
                        let question_id = question.id.clone();
                        view! {
                            <label class="quiz-option" class:quiz-option--selected={chosen == Some(index)}>
                                <input
                                    type="radio"
                                    name=question.id.clone()
                                    checked={chosen == Some(index)}
                                    disabled=submitting
                                    on:change=move |_| session.update(|s| {
                                        if let Err(e) = s.select(&question_id, index) {
                                            log::warn!("{e}");
                                        }
                                    })
                                />
                                <span>{text}</span>
                            </label>
                        }
                    })
                    .collect_view();
                view! {
                    <fieldset class="quiz-question">
                        <legend>{format!("{}. {}", number + 1, question.question)}</legend>
                        {options}
                    </fieldset>
                }
            })
            .collect_view();
        view! {
            <header class="page-header">
                <h1>{quiz.title}</h1>
                <p>{quiz.description.unwrap_or_default()}</p>
                <p class="quiz-meta">{format!("Passing score: {}%", quiz.passing_score)}</p>
            </header>
            <form class="quiz-form" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                {questions}
            </form>
            <footer class="quiz-footer">
                <span>{answered_label(&state)}</span>
                <button class="btn btn--ghost" on:click=move |_| session.update(QuizSession::exit)>"Back to quizzes"</button>
                <button class="btn btn--primary" disabled={!state.can_submit()} on:click=on_submit>
                    {if submitting { "Grading..." } else { "Submit answers" }}
                </button>
            </footer>
        }
        .into_any()
    };

    let result_view = move |result: QuizResult| {
        let class = if result.passed { "quiz-result quiz-result--passed" } else { "quiz-result" };
        view! {
            <section class=class>
                <h1>{result_headline(&result)}</h1>
                <p>{format!("Score: {}", result.score)}</p>
                <div class="quiz-result__actions">
                    <button class="btn btn--primary" on:click=move |_| session.update(QuizSession::retake)>"Retake"</button>
                    <button class="btn btn--ghost" on:click=move |_| session.update(QuizSession::exit)>"Back to quizzes"</button>
                </div>
            </section>
        }
    };

    view! {
        <div class="quiz-page">
            {move || match session.with(|s| s.phase().clone()) {
                QuizPhase::List => list_view().into_any(),
                QuizPhase::InProgress | QuizPhase::Submitted => attempt_view(),
                QuizPhase::Result(result) => result_view(result).into_any(),
            }}
        </div>
    }
}
