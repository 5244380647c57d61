use super::*;

#[test]
fn width_matches_percentage() {
    assert_eq!(width_style(0), "width: 0%");
    assert_eq!(width_style(70), "width: 70%");
}

#[test]
fn width_is_clamped_to_full() {
    assert_eq!(width_style(250), "width: 100%");
}
