use super::*;

#[test]
fn dashboard_root_matches_exactly() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(is_active("/dashboard/", "/dashboard"));
    assert!(!is_active("/dashboard/cart", "/dashboard"));
}

#[test]
fn section_matches_sub_routes() {
    assert!(is_active("/dashboard/quizzes/q1", "/dashboard/quizzes"));
    assert!(is_active("/courses/c-9", "/courses"));
}

#[test]
fn prefix_without_separator_does_not_match() {
    assert!(!is_active("/dashboard/carts", "/dashboard/cart"));
}

#[test]
fn students_do_not_see_admin_link() {
    let items = visible_items(false);
    assert!(items.iter().all(|item| item.href != "/dashboard/admin"));
    assert_eq!(items.len(), NAV_ITEMS.len() - 1);
}

#[test]
fn managers_see_every_link() {
    assert_eq!(visible_items(true), NAV_ITEMS.to_vec());
}
