use super::*;
use crate::net::supabase::{AuthUser, UserMetadata};

fn session(id: &str) -> Session {
    Session {
        access_token: format!("token-{id}"),
        refresh_token: None,
        expires_at: None,
        user: AuthUser {
            id: id.to_owned(),
            email: Some("ada@example.com".to_owned()),
            user_metadata: UserMetadata::default(),
        },
    }
}

#[test]
fn default_state_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(!state.is_signed_in());
    assert!(!state.loading);
    assert_eq!(state.user_id(), None);
    assert_eq!(state.display_name(), "Guest");
}

#[test]
fn restoring_state_is_loading() {
    assert!(AuthState::restoring().loading);
}

#[test]
fn session_exposes_user_id_and_token() {
    let state = AuthState {
        session: Some(session("u1")),
        ..AuthState::default()
    };
    assert_eq!(state.user_id().as_deref(), Some("u1"));
    assert_eq!(state.token().as_deref(), Some("token-u1"));
    assert_eq!(state.display_name(), "ada");
}

#[test]
fn role_defaults_to_student_until_profile_loads() {
    let state = AuthState {
        session: Some(session("u1")),
        ..AuthState::default()
    };
    assert_eq!(state.role(), UserRole::Student);
    assert!(!state.can_manage_courses());
}

#[test]
fn admin_profile_can_manage_courses() {
    let state = AuthState {
        session: Some(session("u1")),
        profile: Some(UserProfile {
            id: "u1".to_owned(),
            full_name: Some("Grace Hopper".to_owned()),
            role: UserRole::Admin,
            ..UserProfile::default()
        }),
        loading: false,
    };
    assert!(state.can_manage_courses());
    assert_eq!(state.display_name(), "Grace Hopper");
}
