use super::*;

fn enrollment(id: &str, progress: u8, completed: bool, certificate: bool) -> Enrollment {
    Enrollment {
        id: id.to_owned(),
        user_id: "u-1".to_owned(),
        course_id: format!("c-{id}"),
        progress_percentage: progress,
        enrolled_at: None,
        last_accessed: None,
        completed_at: completed.then(|| "2026-01-01T00:00:00Z".to_owned()),
        certificate_issued: certificate,
        course: None,
    }
}

#[test]
fn enrollment_decodes_embedded_course_alias() {
    let row: Enrollment = serde_json::from_value(serde_json::json!({
        "id": "e-1",
        "user_id": "u-1",
        "course_id": "c-1",
        "progress_percentage": 40.0,
        "courses": {"id": "c-1", "title": "Rust 101"}
    }))
    .unwrap();
    assert_eq!(row.progress_percentage, 40);
    assert_eq!(row.course_title(), "Rust 101");
    assert!(row.is_in_progress());
    assert!(!row.certificate_issued);
}

#[test]
fn enrollment_without_course_has_placeholder_title() {
    let row = enrollment("e", 0, false, false);
    assert_eq!(row.course_title(), "Untitled course");
    assert!(!row.is_in_progress());
}

#[test]
fn completed_enrollment_is_not_in_progress() {
    let row = enrollment("e", 100, true, true);
    assert!(row.is_completed());
    assert!(!row.is_in_progress());
}

#[test]
fn summary_counts_enrollment_states() {
    let rows = vec![
        enrollment("a", 0, false, false),
        enrollment("b", 30, false, false),
        enrollment("c", 100, true, true),
        enrollment("d", 100, true, false),
    ];
    let summary = StudentSummary::from_enrollments(&rows);
    assert_eq!(summary.total_courses, 4);
    assert_eq!(summary.completed_courses, 2);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.certificates_earned, 1);
}

#[test]
fn enroll_response_detects_duplicate() {
    let dup = EnrollResponse {
        message: "Already enrolled".to_owned(),
        enrollment_id: "e-1".to_owned(),
    };
    assert!(dup.already_enrolled());
    let fresh = EnrollResponse {
        message: "Enrolled successfully".to_owned(),
        enrollment_id: "e-2".to_owned(),
    };
    assert!(!fresh.already_enrolled());
}

#[test]
fn certificate_code_uses_first_eight_chars() {
    assert_eq!(certificate_code("3f2a9c1d-aaaa-bbbb"), "3F2A9C1D");
    assert_eq!(certificate_code("ab"), "AB");
}

#[test]
fn new_bookmark_omits_missing_note() {
    let body = NewBookmark {
        user_id: "u".to_owned(),
        lesson_id: "l".to_owned(),
        note: None,
    };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"user_id": "u", "lesson_id": "l"}));
}

#[test]
fn certificate_decodes_issued_enrollment_row() {
    let certs: Vec<Certificate> = serde_json::from_value(serde_json::json!([{
        "id": "3f9a0c1d-1111-2222",
        "user_id": "u-1",
        "course_id": "c-1",
        "progress_percentage": 100,
        "completed_at": "2026-01-01T00:00:00",
        "certificate_issued": true
    }]))
    .unwrap();
    assert_eq!(certs.len(), 1);
    assert_eq!(certs[0].enrollment_id, "3f9a0c1d-1111-2222");
    assert_eq!(certs[0].completed_at.as_deref(), Some("2026-01-01T00:00:00"));
    assert_eq!(certs[0].title(), "Course");
    assert_eq!(certificate_code(&certs[0].enrollment_id), "3F9A0C1D");
}

#[test]
fn certificate_title_falls_back_to_embedded_course() {
    let cert: Certificate = serde_json::from_value(serde_json::json!({
        "id": "e-1",
        "courses": {"id": "c-1", "title": "Rust 101"}
    }))
    .unwrap();
    assert_eq!(cert.title(), "Rust 101");

    let cert: Certificate = serde_json::from_value(serde_json::json!({
        "enrollment_id": "e-1",
        "course_title": "Async Rust",
        "courses": {"id": "c-1", "title": "Rust 101"}
    }))
    .unwrap();
    assert_eq!(cert.title(), "Async Rust");
}

fn enrolled_in(id: &str, category: &str) -> Enrollment {
    let mut row = enrollment(id, 10, false, false);
    row.course = Some(
        serde_json::from_value(serde_json::json!({"id": format!("c-{id}"), "title": "T", "category": category})).unwrap(),
    );
    row
}

#[test]
fn analytics_decodes_backend_payload() {
    let analytics: StudentAnalytics = serde_json::from_value(serde_json::json!({
        "enrollment_trend": [{"month": "Jan", "enrollments": 2}],
        "category_distribution": [{"name": "Programming", "value": 3}, {"name": "Design", "value": 1}],
        "activity_distribution": [{"type": "Quizzes", "count": 12}]
    }))
    .unwrap();
    assert_eq!(analytics.enrollment_trend[0].enrollments, 2);
    assert_eq!(analytics.activity_distribution[0].kind, "Quizzes");
    assert_eq!(analytics.category_shares(), vec![("Programming", 75), ("Design", 25)]);
}

#[test]
fn analytics_missing_sections_default_to_empty() {
    let analytics: StudentAnalytics = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(analytics.category_shares().is_empty());
}

#[test]
fn local_category_distribution_counts_embedded_courses() {
    let rows = vec![
        enrolled_in("a", "Programming"),
        enrolled_in("b", ""),
        enrolled_in("c", "Programming"),
        enrollment("d", 0, false, false),
    ];
    let counts = StudentAnalytics::category_distribution(&rows);
    assert_eq!(
        counts,
        vec![
            CategoryCount { name: "Programming".to_owned(), value: 2 },
            CategoryCount { name: UNCATEGORIZED.to_owned(), value: 1 },
        ]
    );
}
