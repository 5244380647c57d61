//! REST calls against the Edubox backend at `{BACKEND_URL}/api`.
//!
//! One function per endpoint. Each returns `Result<_, ApiError>`; callers log
//! and surface the error and leave the page in its prior state.
//!
//! Responses the UI only acknowledges (cart edits, deletes, session
//! transitions) decode into `serde_json::Value` and are dropped; pages
//! re-fetch the affected list afterwards.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use courseware::admin::{Ack, AdminMetrics, CourseDraft, ManagedCourse};
use courseware::ai::{ContentSuggestion, CourseRecommendation, GeneratedQuiz, LearningPath, LearningPathRequest, LearningStyle, QuizDifficulty};
use courseware::commerce::{CartItem, CartLine, Invoice, Payment, PaymentConfirmation, PaymentIntent, PaymentIntentRequest, Purchase, PurchaseCheck};
use courseware::enrollment::{Bookmark, Certificate, EnrollResponse, NewBookmark, StudentAnalytics, StudentSummary};
use courseware::forum::{Forum, ForumThread, NewPost, NewThread, ThreadSort, VoteOutcome, VoteRequest};
use courseware::gamification::{Badge, BadgeAward, GamificationStats, LeaderboardEntry, UserBadge, assign_ranks};
use courseware::live::{AttendeeRegistration, LiveSession, LiveSessionFilter, NewLiveSession};
use courseware::quiz::{QuizDetail, QuizResult, QuizSubmission, QuizSummary};
use courseware::user::{ProfileUpdate, UserProfile};
use courseware::{Course, CourseDetails};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{self, ApiError, Verb};
use crate::config;

type Query<'a> = &'a [(&'a str, String)];

/// Absolute URL of an API path under `base`.
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}/api{path}")
}

fn url(path: &str, query: Query<'_>) -> String {
    http::with_query(&endpoint(&config::backend_url(), path), query)
}

/// Path segment escaped for interpolation into a route.
fn seg(raw: &str) -> String {
    http::encode_component(raw)
}

async fn get<T: DeserializeOwned>(path: &str, query: Query<'_>) -> Result<T, ApiError> {
    http::send::<(), T>(Verb::Get, &url(path, query), &[], None).await
}

async fn call<B, T>(verb: Verb, path: &str, query: Query<'_>, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    http::send(verb, &url(path, query), &[], body).await
}

async fn acknowledge(verb: Verb, path: &str, query: Query<'_>) -> Result<(), ApiError> {
    call::<(), serde_json::Value>(verb, path, query, None).await.map(|_| ())
}

// ---- catalog and enrollment ----

pub async fn list_courses() -> Result<Vec<Course>, ApiError> {
    get("/courses", &[]).await
}

pub async fn course_details(course_id: &str) -> Result<CourseDetails, ApiError> {
    get(&format!("/courses/{}/details", seg(course_id)), &[]).await
}

/// Enroll `user_id`. An existing enrollment is reported as success.
pub async fn enroll(course_id: &str, user_id: &str) -> Result<EnrollResponse, ApiError> {
    call::<(), _>(
        Verb::Post,
        &format!("/courses/{}/enroll", seg(course_id)),
        &[("user_id", user_id.to_owned())],
        None,
    )
    .await
}

pub async fn student_summary(user_id: &str) -> Result<StudentSummary, ApiError> {
    get("/student/dashboard/summary", &[("user_id", user_id.to_owned())]).await
}

pub async fn student_analytics(user_id: &str) -> Result<StudentAnalytics, ApiError> {
    get("/student/analytics", &[("user_id", user_id.to_owned())]).await
}

pub async fn certificates(user_id: &str) -> Result<Vec<Certificate>, ApiError> {
    get(&format!("/certificates/user/{}", seg(user_id)), &[]).await
}

/// Link target for the PDF certificate of an enrollment.
pub fn certificate_download_url(enrollment_id: &str) -> String {
    url(&format!("/certificates/{}/download", seg(enrollment_id)), &[])
}

// ---- quizzes ----

pub async fn quizzes(course_id: Option<&str>) -> Result<Vec<QuizSummary>, ApiError> {
    let query: Vec<(&str, String)> = course_id.map(|id| ("course_id", id.to_owned())).into_iter().collect();
    get("/quizzes/by-course", &query).await
}

pub async fn quiz(quiz_id: &str) -> Result<QuizDetail, ApiError> {
    get(&format!("/quizzes/{}", seg(quiz_id)), &[]).await
}

pub async fn submit_quiz(submission: &QuizSubmission) -> Result<QuizResult, ApiError> {
    call(Verb::Post, &format!("/quizzes/{}/attempt", seg(&submission.quiz_id)), &[], Some(submission)).await
}

// ---- profile and bookmarks ----

pub async fn user_profile(user_id: &str) -> Result<UserProfile, ApiError> {
    get(&format!("/users/{}/profile", seg(user_id)), &[]).await
}

pub async fn update_profile(user_id: &str, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    call(Verb::Patch, &format!("/users/{}/profile", seg(user_id)), &[], Some(update)).await
}

pub async fn bookmarks(user_id: &str) -> Result<Vec<Bookmark>, ApiError> {
    get(&format!("/bookmarks/{}", seg(user_id)), &[]).await
}

pub async fn add_bookmark(bookmark: &NewBookmark) -> Result<Bookmark, ApiError> {
    call(Verb::Post, "/bookmarks", &[], Some(bookmark)).await
}

pub async fn delete_bookmark(bookmark_id: &str) -> Result<(), ApiError> {
    acknowledge(Verb::Delete, &format!("/bookmarks/{}", seg(bookmark_id)), &[]).await
}

// ---- forums ----

pub async fn course_forum(course_id: &str) -> Result<Forum, ApiError> {
    get(&format!("/forums/course/{}", seg(course_id)), &[]).await
}

pub async fn forum_threads(forum_id: &str, sort: ThreadSort) -> Result<Vec<ForumThread>, ApiError> {
    get(
        &format!("/forums/{}/threads", seg(forum_id)),
        &[("sort_by", sort.as_param().to_owned())],
    )
    .await
}

pub async fn search_forum(forum_id: &str, text: &str) -> Result<Vec<ForumThread>, ApiError> {
    get(&format!("/forums/{}/search", seg(forum_id)), &[("q", text.to_owned())]).await
}

pub async fn thread(thread_id: &str) -> Result<ForumThread, ApiError> {
    get(&format!("/forums/threads/{}", seg(thread_id)), &[]).await
}

pub async fn create_thread(thread: &NewThread) -> Result<ForumThread, ApiError> {
    call(Verb::Post, "/forums/threads", &[], Some(thread)).await
}

pub async fn reply(post: &NewPost) -> Result<serde_json::Value, ApiError> {
    call(Verb::Post, "/forums/posts", &[], Some(post)).await
}

/// Cast or toggle a vote. The backend decides whether it was added,
/// changed, or removed.
pub async fn vote(vote: &VoteRequest) -> Result<VoteOutcome, ApiError> {
    call(Verb::Post, "/forums/vote", &[], Some(vote)).await
}

pub async fn mark_best_answer(post_id: &str, thread_id: &str) -> Result<(), ApiError> {
    acknowledge(
        Verb::Put,
        &format!("/forums/posts/{}/best-answer", seg(post_id)),
        &[("thread_id", thread_id.to_owned())],
    )
    .await
}

// ---- gamification ----

pub async fn badges() -> Result<Vec<Badge>, ApiError> {
    get("/gamification/badges", &[]).await
}

pub async fn user_badges(user_id: &str) -> Result<Vec<UserBadge>, ApiError> {
    get(&format!("/gamification/user-badges/{}", seg(user_id)), &[]).await
}

/// Award `badge_id` to `user_id`. Already holding it is not an error.
pub async fn award_badge(user_id: &str, badge_id: &str) -> Result<BadgeAward, ApiError> {
    call::<(), _>(
        Verb::Post,
        "/gamification/award-badge",
        &[("user_id", user_id.to_owned()), ("badge_id", badge_id.to_owned())],
        None,
    )
    .await
}

pub async fn leaderboard(limit: usize) -> Result<Vec<LeaderboardEntry>, ApiError> {
    let rows = get("/gamification/leaderboard", &[("limit", limit.to_string())]).await?;
    Ok(assign_ranks(rows))
}

pub async fn gamification_stats(user_id: &str) -> Result<GamificationStats, ApiError> {
    get(&format!("/gamification/user-stats/{}", seg(user_id)), &[]).await
}

// ---- live sessions ----

pub async fn live_sessions(filter: &LiveSessionFilter) -> Result<Vec<LiveSession>, ApiError> {
    get("/live-sessions", &filter.query_pairs()).await
}

pub async fn upcoming_sessions(limit: usize) -> Result<Vec<LiveSession>, ApiError> {
    get("/live-sessions/upcoming", &[("limit", limit.to_string())]).await
}

pub async fn live_session(session_id: &str) -> Result<LiveSession, ApiError> {
    get(&format!("/live-sessions/{}", seg(session_id)), &[]).await
}

pub async fn session_recordings(course_id: Option<&str>) -> Result<Vec<LiveSession>, ApiError> {
    let query: Vec<(&str, String)> = course_id.map(|id| ("course_id", id.to_owned())).into_iter().collect();
    get("/live-sessions/recordings", &query).await
}

pub async fn create_live_session(session: &NewLiveSession) -> Result<LiveSession, ApiError> {
    call(Verb::Post, "/live-sessions", &[], Some(session)).await
}

pub async fn register_for_session(registration: &AttendeeRegistration) -> Result<(), ApiError> {
    call::<_, serde_json::Value>(Verb::Post, "/live-sessions/register", &[], Some(registration))
        .await
        .map(|_| ())
}

/// Instructor-side lifecycle transition of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTransition {
    Start,
    End,
    Cancel,
}

impl SessionTransition {
    fn path(self, session_id: &str) -> String {
        let action = match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Cancel => "cancel",
        };
        format!("/live-sessions/{}/{action}", seg(session_id))
    }
}

pub async fn transition_session(session_id: &str, transition: SessionTransition) -> Result<(), ApiError> {
    acknowledge(Verb::Put, &transition.path(session_id), &[]).await
}

// ---- cart, payments, purchases ----

pub async fn cart(user_id: &str) -> Result<Vec<CartItem>, ApiError> {
    get(&format!("/cart/{}", seg(user_id)), &[]).await
}

pub async fn add_to_cart(line: &CartLine) -> Result<(), ApiError> {
    call::<_, serde_json::Value>(Verb::Post, "/cart/add", &[], Some(line))
        .await
        .map(|_| ())
}

pub async fn remove_from_cart(user_id: &str, course_id: &str) -> Result<(), ApiError> {
    acknowledge(
        Verb::Delete,
        "/cart/remove",
        &[("user_id", user_id.to_owned()), ("course_id", course_id.to_owned())],
    )
    .await
}

pub async fn clear_cart(user_id: &str) -> Result<(), ApiError> {
    acknowledge(Verb::Delete, &format!("/cart/{}/clear", seg(user_id)), &[]).await
}

pub async fn create_payment_intent(request: &PaymentIntentRequest) -> Result<PaymentIntent, ApiError> {
    call(Verb::Post, "/payments/create-intent", &[], Some(request)).await
}

pub async fn confirm_payment(payment_intent_id: &str) -> Result<PaymentConfirmation, ApiError> {
    call::<(), _>(
        Verb::Post,
        "/payments/confirm",
        &[("payment_intent_id", payment_intent_id.to_owned())],
        None,
    )
    .await
}

pub async fn payment_history(user_id: &str) -> Result<Vec<Payment>, ApiError> {
    get(&format!("/payments/history/{}", seg(user_id)), &[]).await
}

pub async fn invoices(user_id: &str) -> Result<Vec<Invoice>, ApiError> {
    get(&format!("/invoices/{}", seg(user_id)), &[]).await
}

pub async fn purchases(user_id: &str) -> Result<Vec<Purchase>, ApiError> {
    get(&format!("/purchases/{}", seg(user_id)), &[]).await
}

pub async fn has_purchased(user_id: &str, course_id: &str) -> Result<bool, ApiError> {
    let check: PurchaseCheck = get(&format!("/purchases/check/{}/{}", seg(user_id), seg(course_id)), &[]).await?;
    Ok(check.has_purchased)
}

// ---- admin ----

pub async fn admin_metrics() -> Result<AdminMetrics, ApiError> {
    get("/admin/dashboard/metrics", &[]).await
}

pub async fn managed_courses() -> Result<Vec<ManagedCourse>, ApiError> {
    get("/admin/courses/management", &[]).await
}

pub async fn create_course(draft: &CourseDraft) -> Result<Course, ApiError> {
    call(Verb::Post, "/admin/courses", &[], Some(draft)).await
}

pub async fn update_course(course_id: &str, draft: &CourseDraft) -> Result<Course, ApiError> {
    call(Verb::Put, &format!("/admin/courses/{}", seg(course_id)), &[], Some(draft)).await
}

pub async fn delete_course(course_id: &str) -> Result<Ack, ApiError> {
    call::<(), _>(Verb::Delete, &format!("/admin/courses/{}", seg(course_id)), &[], None).await
}

pub async fn admin_users() -> Result<Vec<UserProfile>, ApiError> {
    get("/admin/users", &[]).await
}

pub async fn delete_user(user_id: &str) -> Result<Ack, ApiError> {
    call::<(), _>(Verb::Delete, &format!("/admin/users/{}", seg(user_id)), &[], None).await
}

// ---- AI ----

pub async fn recommend_courses(user_id: &str, limit: usize) -> Result<Vec<CourseRecommendation>, ApiError> {
    get(
        "/ai/recommend-courses",
        &[("user_id", user_id.to_owned()), ("limit", limit.to_string())],
    )
    .await
}

pub async fn learning_path(request: &LearningPathRequest) -> Result<LearningPath, ApiError> {
    call(Verb::Post, "/ai/learning-path", &[], Some(request)).await
}

pub async fn content_suggestions(user_id: &str) -> Result<Vec<ContentSuggestion>, ApiError> {
    get(&format!("/ai/content-suggestions/{}", seg(user_id)), &[]).await
}

pub async fn generate_quiz(course_id: &str, difficulty: QuizDifficulty) -> Result<GeneratedQuiz, ApiError> {
    call::<(), _>(
        Verb::Post,
        "/ai/generate-quiz",
        &[("course_id", course_id.to_owned()), ("difficulty", difficulty.as_param().to_owned())],
        None,
    )
    .await
}

pub async fn learning_style(user_id: &str) -> Result<LearningStyle, ApiError> {
    get(&format!("/ai/learning-style/{}", seg(user_id)), &[]).await
}
