use super::*;

#[test]
fn endpoint_joins_base_and_api_prefix() {
    assert_eq!(endpoint("https://api.edubox.test", "/courses"), "https://api.edubox.test/api/courses");
}

#[test]
fn endpoint_with_same_origin_base_is_relative() {
    assert_eq!(endpoint("", "/cart/u1"), "/api/cart/u1");
}

#[test]
fn path_segments_are_escaped() {
    assert_eq!(seg("a/b c"), "a%2Fb%20c");
    assert_eq!(seg("0b5e-41c2"), "0b5e-41c2");
}

#[test]
fn session_transitions_map_to_action_paths() {
    assert_eq!(SessionTransition::Start.path("s1"), "/live-sessions/s1/start");
    assert_eq!(SessionTransition::End.path("s1"), "/live-sessions/s1/end");
    assert_eq!(SessionTransition::Cancel.path("s1"), "/live-sessions/s1/cancel");
}

#[test]
fn certificate_download_url_targets_enrollment() {
    assert!(certificate_download_url("e-42").ends_with("/api/certificates/e-42/download"));
}

#[test]
fn url_appends_query_after_api_path() {
    let built = url("/student/dashboard/summary", &[("user_id", "u 1".to_owned())]);
    assert!(built.ends_with("/api/student/dashboard/summary?user_id=u%201"));
}
