use super::*;

#[test]
fn format_date_takes_calendar_part() {
    assert_eq!(format_date("2026-10-16T09:30:00.000Z"), "2026-10-16");
}

#[test]
fn format_date_passes_through_unrecognized_input() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}

#[test]
fn format_datetime_includes_clock() {
    assert_eq!(format_datetime("2026-10-16T09:30:00Z"), "2026-10-16 09:30");
    assert_eq!(format_datetime("2026-10-16 18:05:12"), "2026-10-16 18:05");
}

#[test]
fn format_datetime_of_bare_date_is_date() {
    assert_eq!(format_datetime("2026-10-16"), "2026-10-16");
}

#[test]
fn date_or_uses_fallback_for_missing() {
    assert_eq!(date_or(None, "In progress"), "In progress");
    assert_eq!(date_or(Some("2026-01-02T00:00:00Z"), "-"), "2026-01-02");
}

#[test]
fn local_input_gains_seconds() {
    assert_eq!(local_input_to_iso("2026-10-16T14:30"), "2026-10-16T14:30:00");
    assert_eq!(local_input_to_iso(""), "");
}

#[test]
fn now_iso_is_parseable_on_native_builds() {
    assert_eq!(format_date(&now_iso()), "1970-01-01");
}
