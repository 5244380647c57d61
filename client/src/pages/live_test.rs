use super::*;

fn session() -> LiveSession {
    serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "course_id": "c-1",
        "title": "Office hours",
        "scheduled_start": "2026-10-20T15:00:00Z",
        "attendees_count": 12
    }))
    .unwrap()
}

#[test]
fn capacity_shows_cap_when_set() {
    let mut s = session();
    assert_eq!(capacity_label(&s), "12 registered");
    s.max_participants = Some(50);
    assert_eq!(capacity_label(&s), "12 / 50 registered");
    s.max_participants = Some(0);
    assert_eq!(capacity_label(&s), "12 registered");
}

#[test]
fn schedule_label_joins_start_and_end() {
    let mut s = session();
    assert_eq!(schedule_label(&s), "2026-10-20 15:00");
    s.scheduled_end = Some("2026-10-20T16:00:00Z".to_owned());
    assert_eq!(schedule_label(&s), "2026-10-20 15:00 to 2026-10-20 16:00");
    s.scheduled_start = None;
    s.scheduled_end = None;
    assert_eq!(schedule_label(&s), "Time to be announced");
}

#[test]
fn empty_dropdowns_build_an_open_filter() {
    assert_eq!(build_filter("", "", None), LiveSessionFilter::default());
}

#[test]
fn dropdown_values_become_filters() {
    let filter = build_filter("c-1", "live", Some("i-1".to_owned()));
    assert_eq!(filter.course_id.as_deref(), Some("c-1"));
    assert_eq!(filter.instructor_id.as_deref(), Some("i-1"));
    assert_eq!(filter.status, Some(SessionStatus::Live));
}

#[test]
fn unknown_status_value_is_ignored() {
    assert_eq!(build_filter("", "postponed", None).status, None);
}

fn attendee(status: &str, minutes: i64, name: Option<&str>) -> SessionAttendee {
    serde_json::from_value(serde_json::json!({
        "session_id": "s-1",
        "user_id": "u-1",
        "status": status,
        "duration_minutes": minutes,
        "user": name.map(|n| serde_json::json!({ "full_name": n })),
    }))
    .unwrap()
}

#[test]
fn attendee_label_includes_minutes_once_attended() {
    assert_eq!(attendee_label(&attendee("attended", 45, Some("Asha Rao"))), "Asha Rao · attended · 45 min");
    assert_eq!(attendee_label(&attendee("registered", 0, Some("Asha Rao"))), "Asha Rao · registered");
}

#[test]
fn attendee_label_defaults_blank_status() {
    let label = attendee_label(&attendee("", 0, None));
    assert!(label.ends_with(" · registered"), "{label}");
}

#[test]
fn clicking_open_panel_closes_it() {
    assert_eq!(next_selection(Some("s-1"), "s-1"), None);
}

#[test]
fn clicking_another_card_switches_panel() {
    assert_eq!(next_selection(None, "s-1").as_deref(), Some("s-1"));
    assert_eq!(next_selection(Some("s-1"), "s-2").as_deref(), Some("s-2"));
}
