use super::*;

fn session(status: SessionStatus) -> LiveSession {
    LiveSession {
        id: "s-1".to_owned(),
        course_id: "c-1".to_owned(),
        instructor_id: Some("i-1".to_owned()),
        title: "Office hours".to_owned(),
        description: String::new(),
        scheduled_start: Some("2026-10-20T15:00:00".to_owned()),
        scheduled_end: None,
        actual_start: None,
        actual_end: None,
        status,
        meeting_url: Some("https://daily.co/room".to_owned()),
        recording_url: None,
        max_participants: Some(100),
        attendees_count: 0,
        course: None,
        instructor: None,
        attendees: Vec::new(),
    }
}

#[test]
fn status_decodes_known_and_unknown_values() {
    let status: SessionStatus = serde_json::from_str("\"live\"").unwrap();
    assert_eq!(status, SessionStatus::Live);
    let status: SessionStatus = serde_json::from_str("\"postponed\"").unwrap();
    assert_eq!(status, SessionStatus::Unknown);
}

#[test]
fn status_from_param_ignores_empty_filter() {
    assert_eq!(SessionStatus::from_param(""), None);
    assert_eq!(SessionStatus::from_param("ended"), Some(SessionStatus::Ended));
}

#[test]
fn actions_follow_the_status() {
    let scheduled = session(SessionStatus::Scheduled);
    assert!(scheduled.can_register());
    assert!(scheduled.can_start());
    assert!(scheduled.can_cancel());
    assert!(!scheduled.can_end());
    assert_eq!(scheduled.join_url(), None);

    let live = session(SessionStatus::Live);
    assert!(!live.can_register());
    assert!(live.can_end());
    assert_eq!(live.join_url(), Some("https://daily.co/room"));

    let ended = session(SessionStatus::Ended);
    assert!(!ended.can_start() && !ended.can_end() && !ended.can_cancel());
}

#[test]
fn detail_decodes_embedded_rows() {
    let detail: LiveSession = serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "course_id": "c-1",
        "title": "Q&A",
        "status": "scheduled",
        "courses": {"title": "Rust 101"},
        "users": {"full_name": "Dana"},
        "attendees": [{"session_id": "s-1", "user_id": "u-9", "status": "registered"}],
        "attendees_count": 1
    }))
    .unwrap();
    assert_eq!(detail.course_title(), "Rust 101");
    assert!(detail.is_registered("u-9"));
    assert!(!detail.is_registered("u-1"));
}

#[test]
fn filter_emits_only_populated_pairs() {
    assert!(LiveSessionFilter::default().query_pairs().is_empty());
    let filter = LiveSessionFilter {
        course_id: Some("c-1".to_owned()),
        instructor_id: Some(String::new()),
        status: Some(SessionStatus::Live),
    };
    assert_eq!(
        filter.query_pairs(),
        vec![("course_id", "c-1".to_owned()), ("status", "live".to_owned())]
    );
}

#[test]
fn new_session_validation_names_first_problem() {
    let mut draft = NewLiveSession {
        course_id: "c-1".to_owned(),
        instructor_id: "i-1".to_owned(),
        title: String::new(),
        description: String::new(),
        scheduled_start: "2026-10-20T15:00".to_owned(),
        duration_minutes: NewLiveSession::DEFAULT_DURATION_MINUTES,
    };
    assert_eq!(draft.validate(), Err("Give the session a title."));
    draft.title = "Kickoff".to_owned();
    assert_eq!(draft.validate(), Ok(()));
    draft.duration_minutes = 0;
    assert!(draft.validate().is_err());
}
