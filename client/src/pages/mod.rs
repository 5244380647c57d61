//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page loads its own resources on mount through `util::remote`, pushes
//! mutations through `net::api` or `net::supabase`, and re-loads the affected
//! lists afterwards.

pub mod achievements;
pub mod admin;
pub mod ai;
pub mod cart;
pub mod catalog;
pub mod certificates;
pub mod course_detail;
pub mod dashboard;
pub mod forums;
pub mod home;
pub mod learn;
pub mod live;
pub mod login;
pub mod profile;
pub mod purchases;
pub mod quiz;
