use super::*;

#[test]
fn ui_state_default_is_light_with_expanded_sidebar() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
    assert_eq!(state.cart_count, 0);
}
