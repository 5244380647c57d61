//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the shared JSON transport and error type, `api` wraps the REST
//! backend, and `supabase` wraps the managed auth service and its table API.

pub mod api;
pub mod http;
pub mod supabase;
