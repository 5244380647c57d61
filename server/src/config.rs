//! Host configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 3000.
//! - `SITE_ROOT`: directory holding the built `pkg/` bundle. Overrides the
//!   Leptos `site_root` when set.
//!
//! Leptos reads its own `LEPTOS_*` variables separately.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    Port { value: String, source: ParseIntError },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match read("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|source| ConfigError::Port { value: raw, source })?,
            None => DEFAULT_PORT,
        };
        let site_root = read("SITE_ROOT").map(PathBuf::from);

        Ok(Self { port, site_root })
    }

    /// Directory whose `pkg/` subdirectory is served at `/pkg`.
    pub fn site_root_or(&self, leptos_site_root: &str) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
    }
}
