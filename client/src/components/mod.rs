//! Presentation components shared across pages.
//!
//! DESIGN
//! ======
//! Components render already-fetched data and report user intents through
//! callbacks; the pages own fetching and mutation.

pub mod course_card;
pub mod progress_bar;
pub mod public_header;
pub mod sidebar;
pub mod stat_card;
