//! Enrollment, lesson progress, and the student-facing records derived from
//! them (dashboard summary, certificates, bookmarks).

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::numbers;
use crate::progress::progress_percentage;

/// Links a user to a course and carries aggregate progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    /// Completion percentage, `0..=100`.
    #[serde(default, deserialize_with = "numbers::percent")]
    pub progress_percentage: u8,
    #[serde(default)]
    pub enrolled_at: Option<String>,
    #[serde(default)]
    pub last_accessed: Option<String>,
    /// Set once when the course is finished.
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub certificate_issued: bool,
    /// Embedded course row when selected with `courses(*)`.
    #[serde(default, alias = "courses", skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

impl Enrollment {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        !self.is_completed() && self.progress_percentage > 0
    }

    /// Course title when the course row was embedded.
    #[must_use]
    pub fn course_title(&self) -> &str {
        self.course.as_ref().map_or("Untitled course", |course| course.title.as_str())
    }
}

/// Per-lesson completion record for one enrollment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonProgress {
    #[serde(default)]
    pub id: Option<String>,
    pub enrollment_id: String,
    pub lesson_id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub last_accessed_at: Option<String>,
}

/// Response of `POST /api/courses/{id}/enroll`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub message: String,
    pub enrollment_id: String,
}

impl EnrollResponse {
    /// The backend answers duplicate enrollments with a success message.
    #[must_use]
    pub fn already_enrolled(&self) -> bool {
        self.message.eq_ignore_ascii_case("already enrolled")
    }
}

/// Response of `GET /api/student/dashboard/summary`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_courses: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub completed_courses: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub in_progress: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub certificates_earned: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_study_hours: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub current_streak: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub points_earned: i64,
}

impl StudentSummary {
    /// Summarize a fetched enrollment list the way the dashboard cards show it.
    #[must_use]
    pub fn from_enrollments(enrollments: &[Enrollment]) -> Self {
        let count = |pred: fn(&Enrollment) -> bool| -> i64 {
            i64::try_from(enrollments.iter().filter(|e| pred(e)).count()).unwrap_or(i64::MAX)
        };
        Self {
            total_courses: count(|_| true),
            completed_courses: count(Enrollment::is_completed),
            in_progress: count(Enrollment::is_in_progress),
            certificates_earned: count(|e| e.certificate_issued),
            ..Self::default()
        }
    }
}

/// One slice of the enrolled-category breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub value: i64,
}

/// Enrollments started in one month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub month: String,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub enrollments: i64,
}

/// Count of one kind of learning activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    #[serde(default, rename = "type", deserialize_with = "numbers::string_or_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub count: i64,
}

/// `GET /api/student/analytics` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAnalytics {
    #[serde(default)]
    pub enrollment_trend: Vec<TrendPoint>,
    #[serde(default)]
    pub category_distribution: Vec<CategoryCount>,
    #[serde(default)]
    pub activity_distribution: Vec<ActivityCount>,
}

/// Category used when an embedded course has none.
pub const UNCATEGORIZED: &str = "Other";

impl StudentAnalytics {
    /// Category counts over enrollments whose course row was embedded, in
    /// first-seen order.
    #[must_use]
    pub fn category_distribution(enrollments: &[Enrollment]) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for course in enrollments.iter().filter_map(|e| e.course.as_ref()) {
            let name = Some(course.category.trim()).filter(|c| !c.is_empty()).unwrap_or(UNCATEGORIZED);
            match counts.iter_mut().find(|c| c.name == name) {
                Some(slot) => slot.value += 1,
                None => counts.push(CategoryCount {
                    name: name.to_owned(),
                    value: 1,
                }),
            }
        }
        counts
    }

    /// Category names with their share of all counted enrollments, largest
    /// first. Ties keep backend order.
    #[must_use]
    pub fn category_shares(&self) -> Vec<(&str, u8)> {
        let as_count = |value: i64| usize::try_from(value).unwrap_or(0);
        let total: usize = self.category_distribution.iter().map(|c| as_count(c.value)).sum();
        let mut shares: Vec<(&str, u8)> = self
            .category_distribution
            .iter()
            .map(|c| (c.name.as_str(), progress_percentage(as_count(c.value), total)))
            .collect();
        shares.sort_by(|a, b| b.1.cmp(&a.1));
        shares
    }
}

/// Certificate listing entry.
///
/// The listing endpoint returns issued `enrollments` rows as-is, so the
/// enrollment's `id` doubles as the certificate key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(alias = "id")]
    pub enrollment_id: String,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub certificate_id: Option<String>,
    #[serde(default, alias = "courses", skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

impl Certificate {
    /// Explicit title, then the embedded course's, then a placeholder.
    #[must_use]
    pub fn title(&self) -> &str {
        self.course_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.course.as_ref().map(|c| c.title.as_str()))
            .unwrap_or("Course")
    }
}

/// Short display identifier for a certificate: first 8 chars, uppercased.
#[must_use]
pub fn certificate_code(enrollment_id: &str) -> String {
    enrollment_id.chars().take(8).collect::<String>().to_uppercase()
}

/// A saved lesson bookmark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub lesson_id: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/bookmarks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewBookmark {
    pub user_id: String,
    pub lesson_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
