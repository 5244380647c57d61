//! Quiz DTOs and the attempt state machine.
//!
//! FLOW
//! ====
//! `List -> InProgress -> Submitted -> Result`. Answers are collected per
//! question id while in progress; the submit control is enabled only when
//! every question has an answer. Grading happens on the server. A failed
//! submission drops back to `InProgress` with answers kept. There is no
//! partial save and no resume.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::numbers;

/// Quiz list entry (`GET /api/quizzes/by-course`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub questions_count: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub passing_score: i64,
    #[serde(default)]
    pub duration: Option<String>,
}

/// One multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
}

/// Quiz with its questions (`GET /api/quizzes/{id}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub passing_score: i64,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// Body of `POST /api/quizzes/{id}/attempt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizSubmission {
    pub quiz_id: String,
    pub user_id: String,
    /// Selected option index keyed by question id.
    pub answers: BTreeMap<String, usize>,
}

/// Server grading result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: String,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub score: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub percentage: i64,
    pub passed: bool,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub total_questions: i64,
    #[serde(default, deserialize_with = "numbers::i64_or_zero")]
    pub correct_answers: i64,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// Errors raised by [`QuizSession`] transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("no question with id {0}")]
    UnknownQuestion(String),
    #[error("option {option} is out of range for question {question_id}")]
    OptionOutOfRange { question_id: String, option: usize },
    #[error("answer all questions before submitting ({answered}/{total})")]
    Incomplete { answered: usize, total: usize },
    #[error("quiz is not accepting this action in its current state")]
    WrongPhase,
}

/// Where the attempt currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QuizPhase {
    /// Browsing the quiz list; nothing loaded.
    #[default]
    List,
    InProgress,
    /// Submission in flight.
    Submitted,
    Result(QuizResult),
}

/// State of one quiz attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizSession {
    quiz: Option<QuizDetail>,
    answers: BTreeMap<String, usize>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start an attempt for a loaded quiz.
    #[must_use]
    pub fn start(quiz: QuizDetail) -> Self {
        Self {
            quiz: Some(quiz),
            answers: BTreeMap::new(),
            phase: QuizPhase::InProgress,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&QuizDetail> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.as_ref().map_or(0, |quiz| quiz.questions.len())
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.question_count() > 0 && self.answered_count() >= self.question_count()
    }

    /// Record (or change) the answer for a question.
    ///
    /// # Errors
    ///
    /// Fails outside `InProgress`, for unknown questions, and for option
    /// indices past the question's options.
    pub fn select(&mut self, question_id: &str, option: usize) -> Result<(), QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(QuizError::WrongPhase);
        }
        let question = self
            .quiz
            .as_ref()
            .and_then(|quiz| quiz.questions.iter().find(|q| q.id == question_id))
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_owned()))?;
        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                question_id: question_id.to_owned(),
                option,
            });
        }
        self.answers.insert(question_id.to_owned(), option);
        Ok(())
    }

    /// Move to `Submitted` and return the request body.
    ///
    /// # Errors
    ///
    /// Fails outside `InProgress` or when any question is unanswered.
    pub fn submit(&mut self, user_id: &str) -> Result<QuizSubmission, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(QuizError::WrongPhase);
        }
        let Some(quiz) = self.quiz.as_ref() else {
            return Err(QuizError::WrongPhase);
        };
        if !self.can_submit() {
            return Err(QuizError::Incomplete {
                answered: self.answered_count(),
                total: self.question_count(),
            });
        }
        let submission = QuizSubmission {
            quiz_id: quiz.id.clone(),
            user_id: user_id.to_owned(),
            answers: self.answers.clone(),
        };
        self.phase = QuizPhase::Submitted;
        Ok(submission)
    }

    /// Record the graded result.
    ///
    /// # Errors
    ///
    /// Fails unless a submission is in flight.
    pub fn complete(&mut self, result: QuizResult) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Submitted {
            return Err(QuizError::WrongPhase);
        }
        self.phase = QuizPhase::Result(result);
        Ok(())
    }

    /// Return to `InProgress` after a failed submission, keeping answers.
    pub fn submission_failed(&mut self) {
        if self.phase == QuizPhase::Submitted {
            self.phase = QuizPhase::InProgress;
        }
    }

    /// Start over with the same quiz and no answers.
    pub fn retake(&mut self) {
        if self.quiz.is_some() {
            self.answers.clear();
            self.phase = QuizPhase::InProgress;
        }
    }

    /// Drop the quiz and go back to the list.
    pub fn exit(&mut self) {
        *self = Self::default();
    }
}
