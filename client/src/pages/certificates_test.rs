use super::*;

fn cert(certificate_id: Option<&str>) -> Certificate {
    Certificate {
        enrollment_id: "0b5e41c2-aaaa-bbbb".to_owned(),
        course_title: Some("Rust 101".to_owned()),
        completed_at: Some("2026-09-01T10:00:00Z".to_owned()),
        certificate_id: certificate_id.map(str::to_owned),
        course: None,
    }
}

#[test]
fn code_derives_from_enrollment_when_unissued() {
    assert_eq!(display_code(&cert(None)), "0B5E41C2");
    assert_eq!(display_code(&cert(Some(""))), "0B5E41C2");
}

#[test]
fn issued_certificate_id_wins() {
    assert_eq!(display_code(&cert(Some("CERT-77"))), "CERT-77");
}
