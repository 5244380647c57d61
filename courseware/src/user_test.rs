use super::*;

fn profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: Some("ada.l@example.com".to_owned()),
        full_name: Some("Ada Lovelace".to_owned()),
        institution: Some("Analytical Society".to_owned()),
        interests: vec!["math".to_owned()],
        ..UserProfile::default()
    }
}

#[test]
fn role_decodes_and_gates_management() {
    let row: UserProfile = serde_json::from_value(serde_json::json!({"id": "u", "role": "admin"})).unwrap();
    assert_eq!(row.role, UserRole::Admin);
    assert!(row.role.can_manage_courses());
    assert!(!UserRole::Student.can_manage_courses());

    let row: UserProfile = serde_json::from_value(serde_json::json!({"id": "u", "role": "guest"})).unwrap();
    assert_eq!(row.role, UserRole::Unknown);
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let mut user = profile();
    assert_eq!(user.display_name(), "Ada Lovelace");
    user.full_name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "ada.l");
    user.email = None;
    assert_eq!(user.display_name(), "Learner");
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(profile().initials(), "AL");
    assert_eq!(initials("grace brewster murray"), "GB");
    assert_eq!(initials(""), "");
}

#[test]
fn parse_interests_dedupes_case_insensitively() {
    assert_eq!(parse_interests(" Rust, , web,rust ,AI"), vec!["Rust", "web", "AI"]);
    assert!(parse_interests("").is_empty());
}

#[test]
fn diff_keeps_only_changed_fields() {
    let current = profile();
    let update = ProfileUpdate::diff(&current, "Ada Lovelace", "Analytical Society", "Poet of science", "math");
    assert_eq!(update.about.as_deref(), Some("Poet of science"));
    assert!(update.full_name.is_none());
    assert!(update.interests.is_none());
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"about": "Poet of science"}));

    let unchanged = ProfileUpdate::diff(&current, " Ada Lovelace ", "Analytical Society", "", "math");
    assert!(unchanged.is_empty());
}
