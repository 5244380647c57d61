use courseware::user::{UserProfile, UserRole};

use super::*;
use crate::net::supabase::{AuthUser, Session};

fn signed_in(role: Option<UserRole>) -> AuthState {
    AuthState {
        session: Some(Session {
            access_token: "jwt".to_owned(),
            refresh_token: None,
            expires_at: None,
            user: AuthUser {
                id: "u1".to_owned(),
                ..AuthUser::default()
            },
        }),
        profile: role.map(|role| UserProfile {
            id: "u1".to_owned(),
            role,
            ..UserProfile::default()
        }),
        loading: false,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::restoring()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in(None)));
}

#[test]
fn students_are_denied_admin_routes() {
    assert!(should_deny_admin(&signed_in(Some(UserRole::Student))));
    assert!(should_deny_admin(&signed_in(None)));
}

#[test]
fn instructors_and_admins_pass_admin_guard() {
    assert!(!should_deny_admin(&signed_in(Some(UserRole::Instructor))));
    assert!(!should_deny_admin(&signed_in(Some(UserRole::Admin))));
}

#[test]
fn admin_guard_waits_for_profile_load() {
    let mut state = signed_in(None);
    state.loading = true;
    assert!(!should_deny_admin(&state));
}
