use super::*;

fn enrollment(progress: u8, completed_at: Option<&str>) -> Enrollment {
    Enrollment {
        id: "e1".to_owned(),
        user_id: "u1".to_owned(),
        course_id: "c1".to_owned(),
        progress_percentage: progress,
        enrolled_at: None,
        last_accessed: None,
        completed_at: completed_at.map(str::to_owned),
        certificate_issued: false,
        course: None,
    }
}

#[test]
fn untouched_enrollment_starts() {
    assert_eq!(resume_label(&enrollment(0, None)), "Start");
}

#[test]
fn partial_enrollment_continues() {
    assert_eq!(resume_label(&enrollment(40, None)), "Continue");
}

#[test]
fn completed_enrollment_is_reviewed() {
    assert_eq!(resume_label(&enrollment(100, Some("2026-10-01T00:00:00Z"))), "Review");
}

#[test]
fn backend_value_wins_over_local_counts() {
    let remote = with_local_fallback(Ok(3_i64), Some(1), "count");
    assert_eq!(remote, Remote::Ready(3));
}

#[test]
fn failed_fetch_uses_local_counts() {
    let remote = with_local_fallback(Err(ApiError::Unavailable), Some(1_i64), "count");
    assert_eq!(remote, Remote::Ready(1));
}

#[test]
fn failed_fetch_without_local_counts_fails() {
    let remote = with_local_fallback::<i64>(Err(ApiError::Unavailable), None, "count");
    assert!(remote.error().is_some());
}
