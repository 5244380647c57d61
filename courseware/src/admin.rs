//! Admin dashboard metrics and course management.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::{Deserialize, Serialize};

use crate::catalog::DIFFICULTIES;
use crate::course::Course;
use crate::numbers;

/// Response of `GET /api/admin/dashboard/metrics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminMetrics {
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_courses: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_enrollments: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub active_students: i64,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "numbers::percent")]
    pub avg_completion_rate: u8,
}

impl AdminMetrics {
    /// Average enrollments per course, one decimal place.
    #[must_use]
    pub fn enrollments_per_course(&self) -> String {
        if self.total_courses <= 0 {
            return "0.0".to_owned();
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.total_enrollments as f64 / self.total_courses as f64;
        format!("{ratio:.1}")
    }
}

/// A course row in the management table, with its enrollment count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManagedCourse {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub enrollments: i64,
}

/// Editable course fields. Serves both create (`POST /api/admin/courses`) and
/// update (`PUT /api/admin/courses/{id}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub duration: String,
    pub price: f64,
    pub instructor_name: String,
    pub instructor_bio: String,
}

/// Why a draft cannot be saved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("difficulty must be one of Beginner, Intermediate, Advanced")]
    Difficulty,
    #[error("price must be a non-negative number")]
    Price,
}

impl CourseDraft {
    /// Pre-fill the form from an existing course.
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            difficulty: course.difficulty.clone(),
            duration: course.duration.clone(),
            price: course.price,
            instructor_name: course.instructor_name.clone(),
            instructor_bio: course.instructor_bio.clone().unwrap_or_default(),
        }
    }

    /// Parse the price input; blank means free.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Price`] for non-numeric or negative input.
    pub fn parse_price(raw: &str) -> Result<f64, DraftError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        match raw.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
            _ => Err(DraftError::Price),
        }
    }

    /// Trimmed copy of the draft, or the first validation failure.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field, an unknown difficulty, or a
    /// negative price.
    pub fn validated(&self) -> Result<Self, DraftError> {
        let draft = Self {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category: self.category.trim().to_owned(),
            difficulty: self.difficulty.trim().to_owned(),
            duration: self.duration.trim().to_owned(),
            price: self.price,
            instructor_name: self.instructor_name.trim().to_owned(),
            instructor_bio: self.instructor_bio.trim().to_owned(),
        };
        let required = [
            ("Title", &draft.title),
            ("Description", &draft.description),
            ("Category", &draft.category),
            ("Duration", &draft.duration),
            ("Instructor name", &draft.instructor_name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(DraftError::Missing(*field));
        }
        if !DIFFICULTIES.contains(&draft.difficulty.as_str()) {
            return Err(DraftError::Difficulty);
        }
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(DraftError::Price);
        }
        Ok(draft)
    }
}

/// Generic `{"message": ...}` acknowledgement returned by delete endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub message: String,
}
