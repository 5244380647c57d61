//! AI-generated artifacts: recommendations, learning paths, suggestions,
//! generated quizzes, and learning-style analysis.
//!
//! The backend relays model output verbatim, so every field is defaulted.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::numbers;

/// A catalog course annotated with why it was recommended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub ai_reason: String,
    #[serde(default, deserialize_with = "numbers::percent")]
    pub match_score: u8,
}

/// Body of `POST /api/ai/learning-path`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LearningPathRequest {
    pub user_id: String,
    pub goal: String,
}

impl LearningPathRequest {
    /// # Errors
    ///
    /// Returns a user-facing message when the goal is blank.
    pub fn new(user_id: &str, goal: &str) -> Result<Self, &'static str> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err("Describe a goal first.");
        }
        Ok(Self {
            user_id: user_id.to_owned(),
            goal: goal.to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default, deserialize_with = "numbers::i64_rounded")]
    pub week: i64,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub path_name: String,
    #[serde(default, deserialize_with = "numbers::i64_rounded")]
    pub duration_weeks: i64,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub recommended_courses: Vec<String>,
}

impl LearningPath {
    /// Milestones in week order.
    #[must_use]
    pub fn timeline(&self) -> Vec<&Milestone> {
        let mut ordered: Vec<&Milestone> = self.milestones.iter().collect();
        ordered.sort_by_key(|m| m.week);
        ordered
    }
}

/// An external resource suggested from recent activity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSuggestion {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub title: String,
    /// `article`, `video`, `tutorial`, ...
    #[serde(default, rename = "type", deserialize_with = "numbers::string_or_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "numbers::percent")]
    pub relevance_score: u8,
}

/// Difficulty passed to quiz generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl QuizDifficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        Self::ALL.into_iter().find(|d| d.as_param() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Option letter such as `"A"`.
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub correct_answer: String,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub explanation: String,
}

impl GeneratedQuestion {
    /// Zero-based index of the correct option, when the letter is in range.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        let letter = self.correct_answer.trim().chars().next()?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let index = usize::from(u8::try_from(letter).ok()? - b'A');
        (index < self.options.len()).then_some(index)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuiz {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub quiz_title: String,
    #[serde(default)]
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningStyle {
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub primary_style: String,
    #[serde(default, deserialize_with = "numbers::percent")]
    pub confidence: u8,
    /// Preference weights keyed by modality (`video_content`, `reading`, ...).
    #[serde(default)]
    pub preferences: BTreeMap<String, f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl LearningStyle {
    /// Modalities ordered by weight, strongest first.
    #[must_use]
    pub fn ranked_preferences(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.preferences.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Turn a snake_case key such as `video_content` into `Video content`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
