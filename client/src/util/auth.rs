//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, and the sign-in,
//! restore, and sign-out flows all keep `AuthState` and the stored session in
//! step through this module.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::{remote, storage};
use crate::net::{api, supabase};
use crate::state::auth::{AuthState, SESSION_KEY};

/// True when auth has settled and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_signed_in()
}

/// True when auth has settled and the user may not manage courses.
pub fn should_deny_admin(state: &AuthState) -> bool {
    !state.loading && !state.can_manage_courses()
}

/// Redirect to `/auth/signin` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/auth/signin", NavigateOptions::default());
        }
    });
}

/// Send non-admin users back to their dashboard.
pub fn install_admin_guard<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.is_signed_in() && should_deny_admin(&state) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}

/// Restore the stored session, if any, and confirm it is still valid.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let Some(session) = storage::load_json::<supabase::Session>(SESSION_KEY) else {
        auth.set(AuthState::default());
        return;
    };
    remote::spawn(async move {
        match supabase::current_user(&session.access_token).await {
            Ok(user) => {
                let session = supabase::Session { user, ..session };
                establish(auth, session).await;
            }
            Err(e) => {
                log::warn!("stored session rejected: {e}");
                storage::remove(SESSION_KEY);
                auth.set(AuthState::default());
            }
        }
    });
}

/// Persist a fresh session and load its profile row.
pub async fn establish(auth: RwSignal<AuthState>, session: supabase::Session) {
    storage::save_json(SESSION_KEY, &session);
    auth.set(AuthState {
        session: Some(session.clone()),
        profile: None,
        loading: true,
    });
    let profile = match api::user_profile(&session.user.id).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("profile for {} unavailable: {e}", session.user.id);
            None
        }
    };
    auth.set(AuthState {
        session: Some(session),
        profile,
        loading: false,
    });
}

/// Revoke the session and clear local state.
pub fn sign_out(auth: RwSignal<AuthState>) {
    let token = auth.get_untracked().token();
    storage::remove(SESSION_KEY);
    auth.set(AuthState::default());
    if let Some(token) = token {
        remote::spawn(async move {
            if let Err(e) = supabase::sign_out(&token).await {
                log::warn!("sign-out request failed: {e}");
            }
        });
    }
}
