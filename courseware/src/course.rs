//! Course catalog entities: courses, modules, and lessons.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use serde::{Deserialize, Serialize};

use crate::numbers;

/// A course row as returned by `/api/courses` and the `courses` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (UUID string).
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub category: String,
    /// `Beginner`, `Intermediate`, or `Advanced`; free text on the wire.
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub difficulty: String,
    /// Human-readable duration such as `"6 weeks"`.
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub duration: String,
    /// List price in USD.
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub price: f64,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub instructor_name: String,
    #[serde(default)]
    pub instructor_bio: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub review_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Course {
    /// Whether the course can be enrolled in without checkout.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }

    /// Thumbnail URL when one is set and non-empty.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Content type of a lesson.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    #[default]
    Video,
    Text,
    Quiz,
    /// Any content type this client does not render specially.
    #[serde(other)]
    Other,
}

impl LessonKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Text => "Reading",
            Self::Quiz => "Quiz",
            Self::Other => "Lesson",
        }
    }
}

/// A grouping of lessons inside a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub order_index: i64,
}

/// A single lesson. Ordered within its course by `order_index`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub module_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content_type: LessonKind,
    /// Duration in minutes.
    #[serde(default, deserialize_with = "numbers::opt_i64")]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub order_index: i64,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Markdown body for text lessons.
    #[serde(default)]
    pub content: Option<String>,
}

/// Response of `GET /api/courses/{id}/details`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub course: Course,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl CourseDetails {
    /// Lessons sorted by `order_index`, ties kept in arrival order.
    #[must_use]
    pub fn ordered_lessons(&self) -> Vec<Lesson> {
        let mut lessons = self.lessons.clone();
        lessons.sort_by_key(|lesson| lesson.order_index);
        lessons
    }

    /// Sum of known lesson durations, in minutes.
    #[must_use]
    pub fn total_minutes(&self) -> i64 {
        self.lessons.iter().filter_map(|lesson| lesson.duration).sum()
    }
}

/// Group lessons under their modules, each group ordered by `order_index`.
///
/// Lessons without a matching module are returned in a trailing group with
/// `None` as its module.
#[must_use]
pub fn group_by_module(modules: &[Module], lessons: &[Lesson]) -> Vec<(Option<Module>, Vec<Lesson>)> {
    let mut ordered_modules = modules.to_vec();
    ordered_modules.sort_by_key(|module| module.order_index);

    let mut groups: Vec<(Option<Module>, Vec<Lesson>)> = ordered_modules
        .into_iter()
        .map(|module| {
            let mut members: Vec<Lesson> = lessons
                .iter()
                .filter(|lesson| lesson.module_id.as_deref() == Some(module.id.as_str()))
                .cloned()
                .collect();
            members.sort_by_key(|lesson| lesson.order_index);
            (Some(module), members)
        })
        .collect();

    let mut loose: Vec<Lesson> = lessons
        .iter()
        .filter(|lesson| {
            lesson
                .module_id
                .as_deref()
                .is_none_or(|id| !modules.iter().any(|module| module.id == id))
        })
        .cloned()
        .collect();
    if !loose.is_empty() {
        loose.sort_by_key(|lesson| lesson.order_index);
        groups.push((None, loose));
    }
    groups
}

/// Format a lesson duration in minutes as `"1h 05m"` or `"12 min"`.
#[must_use]
pub fn format_minutes(minutes: i64) -> String {
    if minutes >= 60 {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes} min")
    }
}
