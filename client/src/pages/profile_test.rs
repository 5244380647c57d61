use super::*;

#[test]
fn unchanged_form_has_nothing_to_save() {
    let profile = UserProfile {
        id: "u-1".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        interests: vec!["math".to_owned()],
        ..UserProfile::default()
    };
    let update = ProfileUpdate::diff(&profile, "Ada Lovelace", "", "", "math");
    assert_eq!(save_outcome(&update), Some("Nothing to save."));
}

#[test]
fn edited_name_is_saved() {
    let profile = UserProfile::default();
    let update = ProfileUpdate::diff(&profile, "Grace", "", "", "");
    assert_eq!(save_outcome(&update), None);
    assert_eq!(update.full_name.as_deref(), Some("Grace"));
}

#[test]
fn roles_have_readable_labels() {
    assert_eq!(role_label(UserRole::Admin), "Administrator");
    assert_eq!(role_label(UserRole::Unknown), "Member");
}
