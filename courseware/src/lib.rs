//! Course, enrollment, and commerce models plus the view-model arithmetic the
//! Edubox client runs locally.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly and the computations can be tested natively.
//!
//! LAYOUT
//! ======
//! Wire DTOs live next to the computations that read them: `course` and
//! `catalog`, `enrollment` and `progress`, `commerce` and `checkout`, and so
//! on. `numbers` holds the lenient serde helpers shared by all of them.

pub mod admin;
pub mod ai;
pub mod catalog;
pub mod checkout;
pub mod commerce;
pub mod course;
pub mod enrollment;
pub mod forum;
pub mod gamification;
pub mod live;
mod numbers;
pub mod progress;
pub mod quiz;
pub mod user;

pub use catalog::{CourseFilter, filter_courses};
pub use checkout::{CheckoutTotals, convert_and_format_price};
pub use course::{Course, CourseDetails, Lesson, LessonKind};
pub use enrollment::{Enrollment, LessonProgress};
pub use progress::{CourseProgress, EnrollmentProgressUpdate, progress_percentage};
pub use quiz::{QuizPhase, QuizSession};
