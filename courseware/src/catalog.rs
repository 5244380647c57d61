//! Client-side catalog filtering.
//!
//! DESIGN
//! ======
//! The catalog page fetches the full course list once and filters it on every
//! keystroke. A linear scan is enough at catalog sizes; nothing is indexed.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::course::Course;

/// Sentinel the filter dropdowns use for "no filter".
pub const ALL: &str = "All";

/// Difficulty levels offered by the catalog filter, in display order.
pub const DIFFICULTIES: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Search text plus category/difficulty equality filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub search: String,
    pub category: String,
    pub difficulty: String,
}

impl CourseFilter {
    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && is_unset(&self.category) && is_unset(&self.difficulty)
    }

    /// Whether `course` passes every active criterion.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        if !is_unset(&self.category) && course.category != self.category {
            return false;
        }
        if !is_unset(&self.difficulty) && course.difficulty != self.difficulty {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        course.title.to_lowercase().contains(&needle) || course.description.to_lowercase().contains(&needle)
    }
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == ALL
}

/// Apply `filter` to `courses`, preserving input order.
#[must_use]
pub fn filter_courses<'a>(courses: &'a [Course], filter: &CourseFilter) -> Vec<&'a Course> {
    courses.iter().filter(|course| filter.matches(course)).collect()
}

/// Distinct non-empty categories in first-seen order, for the filter dropdown.
#[must_use]
pub fn distinct_categories(courses: &[Course]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for course in courses {
        let category = course.category.trim();
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_owned());
        }
    }
    seen
}
