//! Scheduled live sessions and their attendees.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use serde::{Deserialize, Serialize};

use crate::forum::Author;
use crate::numbers;

/// How often the live-session list refreshes while it is on screen.
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// Lifecycle of a live session. Unknown values decode as `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Live,
    Ended,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl SessionStatus {
    pub const FILTERABLE: [Self; 4] = [Self::Scheduled, Self::Live, Self::Ended, Self::Cancelled];

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Live => "Live now",
            Self::Ended => "Ended",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a filter dropdown value; empty or unrecognized means no filter.
    #[must_use]
    pub fn from_param(raw: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|status| status.as_param() == raw)
    }
}

/// Course title embedded with `courses(title)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTitle {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub title: String,
}

/// A live session row, optionally with course, instructor, and attendees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveSession {
    pub id: String,
    pub course_id: String,
    #[serde(default)]
    pub instructor_id: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub description: String,
    #[serde(default)]
    pub scheduled_start: Option<String>,
    #[serde(default)]
    pub scheduled_end: Option<String>,
    #[serde(default)]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub actual_end: Option<String>,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default, deserialize_with = "numbers::opt_i64")]
    pub max_participants: Option<i64>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub attendees_count: i64,
    #[serde(default, alias = "courses")]
    pub course: Option<CourseTitle>,
    #[serde(default, alias = "users")]
    pub instructor: Option<Author>,
    #[serde(default)]
    pub attendees: Vec<SessionAttendee>,
}

impl LiveSession {
    /// Students may register only before the session starts.
    #[must_use]
    pub fn can_register(&self) -> bool {
        self.status == SessionStatus::Scheduled
    }

    /// Join link, offered only while the session is live.
    #[must_use]
    pub fn join_url(&self) -> Option<&str> {
        if self.status != SessionStatus::Live {
            return None;
        }
        self.meeting_url.as_deref().filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.status == SessionStatus::Scheduled
    }

    #[must_use]
    pub fn can_end(&self) -> bool {
        self.status == SessionStatus::Live
    }

    #[must_use]
    pub fn can_cancel(&self) -> bool {
        self.status == SessionStatus::Scheduled
    }

    /// Whether `user_id` already appears among the attendees.
    #[must_use]
    pub fn is_registered(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|a| a.user_id == user_id)
    }

    #[must_use]
    pub fn course_title(&self) -> &str {
        self.course.as_ref().map_or("", |c| c.title.as_str())
    }
}

/// A registration or attendance record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionAttendee {
    pub session_id: String,
    pub user_id: String,
    /// `registered` or `attended`.
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub status: String,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub left_at: Option<String>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub duration_minutes: i64,
    #[serde(default, alias = "users")]
    pub user: Option<Author>,
}

/// Body of `POST /api/live-sessions/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttendeeRegistration {
    pub session_id: String,
    pub user_id: String,
}

/// Query filters for `GET /api/live-sessions`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSessionFilter {
    pub course_id: Option<String>,
    pub instructor_id: Option<String>,
    pub status: Option<SessionStatus>,
}

impl LiveSessionFilter {
    /// Query pairs for the populated filters, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(course_id) = self.course_id.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("course_id", course_id.to_owned()));
        }
        if let Some(instructor_id) = self.instructor_id.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("instructor_id", instructor_id.to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_param().to_owned()));
        }
        pairs
    }
}

/// Body of `POST /api/live-sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewLiveSession {
    pub course_id: String,
    pub instructor_id: String,
    pub title: String,
    pub description: String,
    /// ISO-8601 start time.
    pub scheduled_start: String,
    pub duration_minutes: u32,
}

impl NewLiveSession {
    pub const DEFAULT_DURATION_MINUTES: u32 = 60;

    /// Check the fields the backend cannot default.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.course_id.trim().is_empty() {
            return Err("Pick a course for the session.");
        }
        if self.title.trim().is_empty() {
            return Err("Give the session a title.");
        }
        if self.scheduled_start.trim().is_empty() {
            return Err("Choose a start time.");
        }
        if self.duration_minutes == 0 {
            return Err("Duration must be at least one minute.");
        }
        Ok(())
    }
}
