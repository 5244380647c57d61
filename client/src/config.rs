//! Build-time configuration for the browser bundle.
//!
//! The WASM bundle has no process environment at runtime, so every setting is
//! captured with `option_env!` when the crate is compiled.
//!
//! - `BACKEND_URL`: origin of the REST backend. `API_URL` is accepted as a
//!   legacy alias; the primary name wins when both are set. Empty means the
//!   backend is served from the same origin as the app.
//! - `SUPABASE_URL`, `SUPABASE_ANON_KEY`: managed auth/database service.
//!
//! Each name is also read with a `NEXT_PUBLIC_` prefix, after the bare name,
//! so existing deployment env files keep working.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Origin of the REST backend, without a trailing slash.
pub fn backend_url() -> String {
    resolve_backend_url(
        first_set(&[option_env!("BACKEND_URL"), option_env!("NEXT_PUBLIC_BACKEND_URL")]),
        first_set(&[option_env!("API_URL"), option_env!("NEXT_PUBLIC_API_URL")]),
    )
}

/// Connection settings for the managed auth/database service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Supabase settings, or `None` when either value is missing at build time.
pub fn supabase() -> Option<SupabaseConfig> {
    resolve_supabase(
        first_set(&[option_env!("SUPABASE_URL"), option_env!("NEXT_PUBLIC_SUPABASE_URL")]),
        first_set(&[option_env!("SUPABASE_ANON_KEY"), option_env!("NEXT_PUBLIC_SUPABASE_ANON_KEY")]),
    )
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// First candidate that is set and not blank.
fn first_set<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates.iter().copied().find_map(non_empty)
}

fn resolve_backend_url(primary: Option<&str>, legacy: Option<&str>) -> String {
    non_empty(primary)
        .or_else(|| non_empty(legacy))
        .unwrap_or("")
        .trim_end_matches('/')
        .to_owned()
}

fn resolve_supabase(url: Option<&str>, anon_key: Option<&str>) -> Option<SupabaseConfig> {
    Some(SupabaseConfig {
        url: non_empty(url)?.trim_end_matches('/').to_owned(),
        anon_key: non_empty(anon_key)?.to_owned(),
    })
}
