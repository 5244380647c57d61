//! User profile rows and profile edits.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

/// Account role stored on the `users` row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Instructor,
    Admin,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    #[must_use]
    pub fn can_manage_courses(self) -> bool {
        matches!(self, Self::Instructor | Self::Admin)
    }
}

/// A row of the `users` table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Full name, falling back to the email's local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.full_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name;
        }
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("Learner")
    }

    /// Up to two uppercase initials for the avatar placeholder.
    #[must_use]
    pub fn initials(&self) -> String {
        initials(self.display_name())
    }
}

/// Initials from the first letters of the first two words.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Body of `PATCH /api/users/{id}/profile`; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    /// Diff form values against the stored profile, keeping only changes.
    #[must_use]
    pub fn diff(current: &UserProfile, full_name: &str, institution: &str, about: &str, interests: &str) -> Self {
        fn changed(old: Option<&str>, new: &str) -> Option<String> {
            let new = new.trim();
            (old.unwrap_or("") != new).then(|| new.to_owned())
        }
        let interests = parse_interests(interests);
        Self {
            full_name: changed(current.full_name.as_deref(), full_name),
            institution: changed(current.institution.as_deref(), institution),
            about: changed(current.about.as_deref(), about),
            interests: (interests != current.interests).then_some(interests),
            avatar_url: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Split a comma-separated interests input, dropping blanks and duplicates.
#[must_use]
pub fn parse_interests(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !out.iter().any(|seen| seen.eq_ignore_ascii_case(item)) {
            out.push(item.to_owned());
        }
    }
    out
}
