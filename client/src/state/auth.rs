//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session comes from the
//! managed auth service; the profile row (with its role) comes from the
//! backend once the session is known.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use courseware::user::{UserProfile, UserRole};

use crate::net::supabase::Session;

/// `localStorage` key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "edubox.session";

/// Authentication state tracking the session, its profile, and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub profile: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the stored session has been checked.
    pub fn restoring() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.user.id.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Role from the profile row; students until the profile loads.
    pub fn role(&self) -> UserRole {
        self.profile.as_ref().map_or(UserRole::Student, |p| p.role)
    }

    pub fn can_manage_courses(&self) -> bool {
        self.role().can_manage_courses()
    }

    /// Name shown in the sidebar and greetings.
    pub fn display_name(&self) -> String {
        match (&self.profile, &self.session) {
            (Some(profile), _) => profile.display_name().to_owned(),
            (None, Some(session)) => session.user.display_name(),
            (None, None) => "Guest".to_owned(),
        }
    }
}
