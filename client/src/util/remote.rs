//! Page data-fetch helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page loads its resources on mount and re-loads them after each
//! mutation. [`Remote`] is the per-resource state those pages render, and
//! [`load`] drives one fetch into a signal.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged to the console and kept as a message for the page to
//! show. Data from an earlier successful load is replaced, not merged.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::http::ApiError;

/// State of one fetched resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    /// Convert a call result, logging failures under `what`.
    pub fn from_result(result: Result<T, ApiError>, what: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                log::error!("{what} failed: {e}");
                Self::Failed(e.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Clone> Remote<T> {
    /// Clone of the loaded value, or `fallback` while loading or failed.
    pub fn ready_or(&self, fallback: T) -> T {
        self.ready().cloned().unwrap_or(fallback)
    }
}

/// Run `fut` on the browser event loop. Dropped on the server build, where
/// no request can complete.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Fetch into `target`, leaving its current value visible until the call
/// completes.
pub fn load<T, F>(target: RwSignal<Remote<T>>, what: &'static str, fut: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn(async move {
        let next = Remote::from_result(fut.await, what);
        target.set(next);
    });
}

/// Status line for a resource that is not ready: a loading note or the error.
pub fn status_text<T>(remote: &Remote<T>, noun: &str) -> Option<String> {
    match remote {
        Remote::Loading => Some(format!("Loading {noun}...")),
        Remote::Failed(message) => Some(format!("Could not load {noun}: {message}")),
        Remote::Ready(_) => None,
    }
}
