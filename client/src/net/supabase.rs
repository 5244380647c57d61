//! Managed auth and database accessor (Supabase-compatible).
//!
//! Auth goes through `/auth/v1/*`; table reads and writes go through the
//! PostgREST surface at `/rest/v1/{table}` with `eq.` filters. Every request
//! carries the project's anon key as `apikey`, plus the signed-in user's
//! access token as a bearer token when one is available so row-level policies
//! apply.
//!
//! TRADE-OFFS
//! ==========
//! Tokens are not refreshed. An expired session surfaces as a 401 from the
//! next call and the user signs in again.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::http::{self, ApiError, Verb};
use crate::config::{self, SupabaseConfig};

/// Identity returned by the auth service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

impl AuthUser {
    /// Name to greet the user with.
    pub fn display_name(&self) -> String {
        self.user_metadata
            .full_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|email| email.split('@').next())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| "Learner".to_owned())
    }
}

/// A signed-in session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// Outcome of a sign-up: either an immediate session, or a pending email
/// confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUp {
    SignedIn(Session),
    ConfirmEmail,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: UserMetadata,
}

fn settings() -> Result<SupabaseConfig, ApiError> {
    config::supabase().ok_or_else(|| ApiError::Network("auth service is not configured".to_owned()))
}

/// `{url}/auth/v1{path}`.
fn auth_url(cfg: &SupabaseConfig, path: &str) -> String {
    format!("{}/auth/v1{path}", cfg.url)
}

/// `{url}/rest/v1/{table}?{query}`.
fn rest_url(cfg: &SupabaseConfig, table: &str, query: &[(&str, String)]) -> String {
    http::with_query(&format!("{}/rest/v1/{table}", cfg.url), query)
}

/// PostgREST equality filter value.
pub fn eq(value: &str) -> String {
    format!("eq.{value}")
}

/// Headers for a request, authorized as the user when a token is given.
fn headers(cfg: &SupabaseConfig, token: Option<&str>, prefer: Option<&str>) -> Vec<(&'static str, String)> {
    let bearer = token.unwrap_or(cfg.anon_key.as_str());
    let mut out = vec![("apikey", cfg.anon_key.clone()), ("Authorization", format!("Bearer {bearer}"))];
    if let Some(prefer) = prefer {
        out.push(("Prefer", prefer.to_owned()));
    }
    out
}

/// Sign in with email and password.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, ApiError> {
    let cfg = settings()?;
    let url = auth_url(&cfg, "/token?grant_type=password");
    http::send(Verb::Post, &url, &headers(&cfg, None, None), Some(&Credentials { email, password })).await
}

/// Create an account. Projects with email confirmation enabled answer with a
/// bare user and no session.
pub async fn sign_up(email: &str, password: &str, full_name: &str) -> Result<SignUp, ApiError> {
    let cfg = settings()?;
    let body = SignUpBody {
        email,
        password,
        data: UserMetadata {
            full_name: Some(full_name.trim().to_owned()).filter(|name| !name.is_empty()),
        },
    };
    let raw: serde_json::Value = http::send(Verb::Post, &auth_url(&cfg, "/signup"), &headers(&cfg, None, None), Some(&body)).await?;
    Ok(sign_up_outcome(raw))
}

fn sign_up_outcome(raw: serde_json::Value) -> SignUp {
    serde_json::from_value::<Session>(raw).map_or(SignUp::ConfirmEmail, SignUp::SignedIn)
}

/// Revoke the session's tokens.
pub async fn sign_out(token: &str) -> Result<(), ApiError> {
    let cfg = settings()?;
    http::send::<(), serde_json::Value>(Verb::Post, &auth_url(&cfg, "/logout"), &headers(&cfg, Some(token), None), None)
        .await
        .map(|_| ())
}

/// Resolve the user behind an access token; fails once the token expired.
pub async fn current_user(token: &str) -> Result<AuthUser, ApiError> {
    let cfg = settings()?;
    http::send::<(), _>(Verb::Get, &auth_url(&cfg, "/user"), &headers(&cfg, Some(token), None), None).await
}

/// `GET /rest/v1/{table}?select=..&{filters}`.
pub async fn select<T: DeserializeOwned>(
    table: &str,
    columns: &str,
    filters: &[(&str, String)],
    token: Option<&str>,
) -> Result<Vec<T>, ApiError> {
    let cfg = settings()?;
    let mut query = vec![("select", columns.to_owned())];
    query.extend(filters.iter().cloned());
    http::send::<(), _>(Verb::Get, &rest_url(&cfg, table, &query), &headers(&cfg, token, None), None).await
}

/// Insert or merge a row on the `on_conflict` columns, returning the stored row.
pub async fn upsert<B, T>(table: &str, on_conflict: &str, row: &B, token: Option<&str>) -> Result<Vec<T>, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let cfg = settings()?;
    let url = rest_url(&cfg, table, &[("on_conflict", on_conflict.to_owned())]);
    let prefer = "resolution=merge-duplicates,return=representation";
    http::send(Verb::Post, &url, &headers(&cfg, token, Some(prefer)), Some(row)).await
}

/// `PATCH /rest/v1/{table}?{filters}`, returning the updated rows.
pub async fn update<B, T>(table: &str, filters: &[(&str, String)], patch: &B, token: Option<&str>) -> Result<Vec<T>, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let cfg = settings()?;
    let url = rest_url(&cfg, table, filters);
    http::send(Verb::Patch, &url, &headers(&cfg, token, Some("return=representation")), Some(patch)).await
}
