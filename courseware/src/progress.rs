//! Lesson-completion tracking for the active enrollment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lesson player marks a lesson complete, patches its local list right
//! away, and then persists both the `lesson_progress` row and the aggregate
//! on the `enrollments` row. This module owns the local half: the completion
//! set, the percentage arithmetic, and the enrollment patch to send.
//!
//! There is no rollback. If persistence fails the check-mark stays and the
//! page diverges from the backend until the next reload.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::course::Lesson;
use crate::enrollment::LessonProgress;

/// Percentage at which an enrollment counts as finished.
pub const COMPLETE: u8 = 100;

/// Error returned by [`CourseProgress::mark_complete`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("lesson {0} is not part of this course")]
    UnknownLesson(String),
}

/// `round(completed / total * 100)`, or 0 when `total` is 0.
///
/// `completed` is clamped to `total`.
#[must_use]
pub fn progress_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    // Integer half-up rounding of completed * 100 / total.
    let scaled = (completed * 200 + total) / (total * 2);
    u8::try_from(scaled).unwrap_or(COMPLETE)
}

/// Patch written to the `enrollments` row after a lesson is completed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnrollmentProgressUpdate {
    pub progress_percentage: u8,
    /// Set to `now` at 100%, explicitly `null` below that.
    pub completed_at: Option<String>,
    pub last_accessed: String,
    /// Sent only at 100% so an issued certificate is never revoked.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub certificate_issued: bool,
}

impl EnrollmentProgressUpdate {
    /// Build the patch for a percentage observed at `now`.
    #[must_use]
    pub fn new(progress_percentage: u8, now: &str) -> Self {
        Self {
            progress_percentage,
            completed_at: (progress_percentage >= COMPLETE).then(|| now.to_owned()),
            last_accessed: now.to_owned(),
            certificate_issued: progress_percentage >= COMPLETE,
        }
    }
}

/// Row written to `lesson_progress` when a lesson is checked off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LessonCompletion {
    pub enrollment_id: String,
    pub lesson_id: String,
    pub completed: bool,
    pub completed_at: String,
}

/// Ordered lessons of one course plus the set completed by one enrollment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseProgress {
    lessons: Vec<Lesson>,
    completed: BTreeSet<String>,
}

impl CourseProgress {
    /// Build from fetched lessons and `lesson_progress` rows.
    ///
    /// Only rows with `completed == true` count. Lessons are sorted by
    /// `order_index`.
    #[must_use]
    pub fn new(mut lessons: Vec<Lesson>, progress: &[LessonProgress]) -> Self {
        lessons.sort_by_key(|lesson| lesson.order_index);
        let completed = progress
            .iter()
            .filter(|row| row.completed)
            .map(|row| row.lesson_id.clone())
            .collect();
        Self { lessons, completed }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.lessons.len()
    }

    /// Completed lessons that belong to this course.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.lessons
            .iter()
            .filter(|lesson| self.completed.contains(&lesson.id))
            .count()
    }

    #[must_use]
    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.completed.contains(lesson_id)
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        progress_percentage(self.completed_count(), self.total())
    }

    /// First lesson not yet completed, in course order.
    #[must_use]
    pub fn next_incomplete(&self) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| !self.completed.contains(&lesson.id))
    }

    /// Lesson following `lesson_id` in course order.
    #[must_use]
    pub fn next_after(&self, lesson_id: &str) -> Option<&Lesson> {
        let index = self.lessons.iter().position(|lesson| lesson.id == lesson_id)?;
        self.lessons.get(index + 1)
    }

    /// Mark `lesson_id` complete and return the enrollment patch to persist.
    ///
    /// Returns `Ok(None)` when the lesson was already complete.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::UnknownLesson`] if the id is not in this course.
    pub fn mark_complete(&mut self, lesson_id: &str, now: &str) -> Result<Option<EnrollmentProgressUpdate>, ProgressError> {
        if !self.lessons.iter().any(|lesson| lesson.id == lesson_id) {
            return Err(ProgressError::UnknownLesson(lesson_id.to_owned()));
        }
        if !self.completed.insert(lesson_id.to_owned()) {
            return Ok(None);
        }
        Ok(Some(EnrollmentProgressUpdate::new(self.percentage(), now)))
    }
}
