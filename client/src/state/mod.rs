//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`) and provided as `RwSignal`
//! contexts from the root component. Page data stays local to each page.

pub mod auth;
pub mod ui;
