//! AI learning assistant: recommendations, learning paths, content
//! suggestions, practice quizzes, and learning-style analysis.
//!
//! Each panel fetches independently. Recommendations, suggestions, and the
//! style analysis load on mount; paths and quizzes are generated on request
//! since every call runs a model.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use courseware::Course;
use courseware::ai::{
    ContentSuggestion, CourseRecommendation, GeneratedQuestion, GeneratedQuiz, LearningPath, LearningPathRequest,
    LearningStyle, QuizDifficulty, humanize_key,
};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::course_card::CourseCard;
use crate::components::progress_bar::ProgressBar;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::remote::{self, Remote, status_text};

const RECOMMENDATION_LIMIT: usize = 6;

/// Preference weight (0-100 on the wire) as a bar percentage.
fn preference_percent(weight: f64) -> u8 {
    if !weight.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = weight.round().clamp(0.0, 100.0) as u8;
    pct
}

fn match_label(score: u8) -> String {
    format!("{score}% match")
}

/// Feedback after picking option `chosen` of a practice question.
fn answer_feedback(question: &GeneratedQuestion, chosen: usize) -> String {
    match question.correct_index() {
        Some(correct) if correct == chosen => "Correct!".to_owned(),
        Some(correct) => format!("Not quite. The answer is {}.", option_letter(correct)),
        None => "No answer key was provided for this question.".to_owned(),
    }
}

fn option_letter(index: usize) -> char {
    u8::try_from(index).ok().and_then(|i| b'A'.checked_add(i)).map_or('?', char::from)
}

#[component]
pub fn AiAssistantPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let recommendations = RwSignal::new(Remote::<Vec<CourseRecommendation>>::Loading);
    let suggestions = RwSignal::new(Remote::<Vec<ContentSuggestion>>::Loading);
    let style = RwSignal::new(Remote::<LearningStyle>::Loading);

    Effect::new(move || {
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        let (for_suggestions, for_style) = (user_id.clone(), user_id.clone());
        remote::load(recommendations, "recommendations", async move {
            api::recommend_courses(&user_id, RECOMMENDATION_LIMIT).await
        });
        remote::load(suggestions, "content suggestions", async move {
            api::content_suggestions(&for_suggestions).await
        });
        remote::load(style, "learning style", async move { api::learning_style(&for_style).await });
    });

    view! {
        <div class="ai-page">
            <header class="page-header">
                <h1>"AI learning assistant"</h1>
            </header>

            <section class="ai-panel">
                <h2>"Recommended for you"</h2>
                {move || recommendations.with(|r| status_text(r, "recommendations")).map(|text| view! { <p class="page-status">{text}</p> })}
                <div class="course-grid">
                    {move || {
                        recommendations
                            .with(|r| r.ready_or(Vec::new()))
                            .into_iter()
                            .map(|rec| {
                                let reason = rec.ai_reason.clone();
                                let score = rec.match_score;
                                view! {
                                    <CourseCard course=rec.course>
                                        <span class="tag tag--accent">{match_label(score)}</span>
                                        <p class="course-card__reason">{reason.clone()}</p>
                                    </CourseCard>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <LearningPathPanel/>

            <section class="ai-panel">
                <h2>"Suggested content"</h2>
                {move || suggestions.with(|s| status_text(s, "suggestions")).map(|text| view! { <p class="page-status">{text}</p> })}
                <ul class="suggestions">
                    {move || {
                        suggestions
                            .with(|s| s.ready_or(Vec::new()))
                            .into_iter()
                            .map(|item| {
                                let title = match item.url.clone().filter(|u| !u.is_empty()) {
                                    Some(url) => view! { <a href=url target="_blank" rel="noopener">{item.title.clone()}</a> }.into_any(),
                                    None => view! { <strong>{item.title.clone()}</strong> }.into_any(),
                                };
                                view! {
                                    <li class="suggestion">
                                        {title}
                                        <span class="tag">{item.kind.clone()}</span>
                                        <span class="muted">{format!("{}% relevant", item.relevance_score)}</span>
                                        <p>{item.description.clone()}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <QuizGeneratorPanel/>

            <section class="ai-panel">
                <h2>"Your learning style"</h2>
                {move || style.with(|s| status_text(s, "learning style")).map(|text| view! { <p class="page-status">{text}</p> })}
                {move || {
                    style.with(|s| s.ready().cloned()).map(|analysis| {
                        view! {
                            <p class="learning-style__primary">
                                {format!("{} ({}% confidence)", humanize_key(&analysis.primary_style), analysis.confidence)}
                            </p>
                            <ul class="learning-style__prefs">
                                {analysis
                                    .ranked_preferences()
                                    .into_iter()
                                    .map(|(key, weight)| {
                                        let pct = preference_percent(weight);
                                        view! {
                                            <li>
                                                <span>{humanize_key(key)}</span>
                                                <ProgressBar percent=pct label=true/>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <ul class="learning-style__tips">
                                {analysis.recommendations.iter().map(|tip| view! { <li>{tip.clone()}</li> }).collect_view()}
                            </ul>
                        }
                    })
                }}
            </section>
        </div>
    }
}

/// Goal form and the generated week-by-week path.
#[component]
fn LearningPathPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let goal = RwSignal::new(String::new());
    let path = RwSignal::new(None::<Remote<LearningPath>>);
    let error = RwSignal::new(None::<String>);

    let generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let request = match LearningPathRequest::new(&user_id, &goal.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        path.set(Some(Remote::Loading));
        remote::spawn(async move {
            let next = Remote::from_result(api::learning_path(&request).await, "learning path");
            path.set(Some(next));
        });
    };

    view! {
        <section class="ai-panel">
            <h2>"Learning path"</h2>
            <form class="form form--inline" on:submit=generate>
                <input
                    placeholder="What do you want to learn? e.g. Become a data analyst"
                    prop:value=move || goal.get()
                    on:input=move |ev| goal.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || path.with(|p| p.as_ref().is_some_and(Remote::is_loading))>
                    "Generate"
                </button>
            </form>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || path.with(|p| p.as_ref().and_then(|p| status_text(p, "learning path"))).map(|text| view! { <p class="page-status">{text}</p> })}
            {move || {
                path.with(|p| p.as_ref().and_then(|p| p.ready().cloned())).map(|plan| {
                    view! {
                        <h3>{format!("{} · {} weeks", plan.path_name, plan.duration_weeks)}</h3>
                        <ol class="timeline">
                            {plan
                                .timeline()
                                .into_iter()
                                .map(|step| view! {
                                    <li class="timeline__step">
                                        <span class="timeline__week">{format!("Week {}", step.week)}</span>
                                        <strong>{step.title.clone()}</strong>
                                        <p>{step.description.clone()}</p>
                                        <div class="course-card__tags">
                                            {step.skills.iter().map(|skill| view! { <span class="tag">{skill.clone()}</span> }).collect_view()}
                                        </div>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    }
                })
            }}
        </section>
    }
}

/// Practice quiz generated for a chosen course and difficulty.
#[component]
fn QuizGeneratorPanel() -> impl IntoView {
    let courses = RwSignal::new(Remote::<Vec<Course>>::Loading);
    let course_id = RwSignal::new(String::new());
    let difficulty = RwSignal::new(QuizDifficulty::default());
    let quiz = RwSignal::new(None::<Remote<GeneratedQuiz>>);
    let picks = RwSignal::new(Vec::<Option<usize>>::new());

    Effect::new(move || remote::load(courses, "courses", api::list_courses()));

    let generate = move |_| {
        let course = course_id.get_untracked();
        if course.is_empty() {
            return;
        }
        let level = difficulty.get_untracked();
        quiz.set(Some(Remote::Loading));
        picks.set(Vec::new());
        remote::spawn(async move {
            let next = Remote::from_result(api::generate_quiz(&course, level).await, "quiz generation");
            if let Some(generated) = next.ready() {
                picks.set(vec![None; generated.questions.len()]);
            }
            quiz.set(Some(next));
        });
    };

    view! {
        <section class="ai-panel">
            <h2>"Practice quiz"</h2>
            <div class="form form--inline">
                <select aria-label="Course" prop:value=move || course_id.get() on:change=move |ev| course_id.set(event_target_value(&ev))>
                    <option value="">"Select a course"</option>
                    {move || {
                        courses
                            .with(|c| c.ready_or(Vec::new()))
                            .into_iter()
                            .map(|course| view! { <option value=course.id.clone()>{course.title.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    aria-label="Difficulty"
                    prop:value=move || difficulty.get().as_param()
                    on:change=move |ev| difficulty.set(QuizDifficulty::from_param(&event_target_value(&ev)))
                >
                    {QuizDifficulty::ALL
                        .into_iter()
                        .map(|level| view! { <option value=level.as_param()>{humanize_key(level.as_param())}</option> })
                        .collect_view()}
                </select>
                <button
                    class="btn btn--primary"
                    on:click=generate
                    disabled=move || course_id.with(String::is_empty) || quiz.with(|q| q.as_ref().is_some_and(Remote::is_loading))
                >
                    "Generate quiz"
                </button>
            </div>
            {move || quiz.with(|q| q.as_ref().and_then(|q| status_text(q, "quiz"))).map(|text| view! { <p class="page-status">{text}</p> })}
            {move || {
                quiz.with(|q| q.as_ref().and_then(|q| q.ready().cloned())).map(|generated| {
                    view! {
                        <h3>{generated.quiz_title.clone()}</h3>
                        <ol class="practice-quiz">
                            {generated
                                .questions
                                .into_iter()
                                .enumerate()
                                .map(|(qi, question)| {
                                    let feedback_question = question.clone();
                                    view! {
                                        <li class="practice-question">
                                            <p>{question.question.clone()}</p>
                                            <div class="practice-question__options">
                                                {question
                                                    .options
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(oi, option)| {
                                                        let label = format!("{}. {option}", option_letter(oi));
                                                        view! {
                                                            <button
                                                                class="btn btn--option"
                                                                class:btn--selected=move || picks.with(|p| p.get(qi).copied().flatten() == Some(oi))
                                                                on:click=move |_| picks.update(|p| {
                                                                    if let Some(slot) = p.get_mut(qi) {
                                                                        *slot = Some(oi);
                                                                    }
                                                                })
                                                            >
                                                                {label}
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            {move || {
                                                picks.with(|p| p.get(qi).copied().flatten()).map(|chosen| {
                                                    view! {
                                                        <p class="practice-question__feedback">{answer_feedback(&feedback_question, chosen)}</p>
                                                        <p class="muted">{feedback_question.explanation.clone()}</p>
                                                    }
                                                })
                                            }}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    }
                })
            }}
        </section>
    }
}
