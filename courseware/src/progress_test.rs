use super::*;
use crate::course::LessonKind;

const NOW: &str = "2026-10-16T12:00:00.000Z";

fn lesson(id: &str, order_index: i64) -> Lesson {
    Lesson {
        id: id.to_owned(),
        course_id: Some("c-1".to_owned()),
        module_id: None,
        title: format!("Lesson {id}"),
        content_type: LessonKind::Video,
        duration: None,
        order_index,
        video_url: None,
        content: None,
    }
}

fn done(lesson_id: &str) -> LessonProgress {
    LessonProgress {
        id: None,
        enrollment_id: "e-1".to_owned(),
        lesson_id: lesson_id.to_owned(),
        completed: true,
        completed_at: None,
        last_accessed_at: None,
    }
}

fn ten_lessons() -> Vec<Lesson> {
    (1..=10).map(|i| lesson(&format!("l{i}"), i)).collect()
}

// =============================================================
// progress_percentage
// =============================================================

#[test]
fn percentage_of_empty_course_is_zero() {
    assert_eq!(progress_percentage(0, 0), 0);
    assert_eq!(progress_percentage(3, 0), 0);
}

#[test]
fn percentage_matches_rounded_ratio_for_all_small_sets() {
    for total in 1..=60_usize {
        for completed in 0..=total {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let expected = (100.0 * completed as f64 / total as f64).round() as u8;
            assert_eq!(progress_percentage(completed, total), expected, "{completed}/{total}");
        }
    }
}

#[test]
fn percentage_rounds_half_up() {
    assert_eq!(progress_percentage(1, 8), 13);
    assert_eq!(progress_percentage(1, 3), 33);
    assert_eq!(progress_percentage(2, 3), 67);
}

#[test]
fn percentage_clamps_overcount() {
    assert_eq!(progress_percentage(12, 10), 100);
}

// =============================================================
// EnrollmentProgressUpdate
// =============================================================

#[test]
fn update_below_complete_clears_completed_at() {
    let update = EnrollmentProgressUpdate::new(99, NOW);
    assert_eq!(update.completed_at, None);
    assert_eq!(update.last_accessed, NOW);
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["completed_at"], serde_json::Value::Null);
}

#[test]
fn update_at_complete_stamps_completed_at() {
    let update = EnrollmentProgressUpdate::new(100, NOW);
    assert_eq!(update.completed_at.as_deref(), Some(NOW));
}

// =============================================================
// CourseProgress
// =============================================================

#[test]
fn ten_lesson_walkthrough() {
    let progress_rows: Vec<LessonProgress> = (1..=7).map(|i| done(&format!("l{i}"))).collect();
    let mut progress = CourseProgress::new(ten_lessons(), &progress_rows);
    assert_eq!(progress.percentage(), 70);

    let update = progress.mark_complete("l8", NOW).unwrap().unwrap();
    assert_eq!(update.progress_percentage, 80);
    assert!(update.completed_at.is_none());
    assert!(!update.certificate_issued);

    let update = progress.mark_complete("l9", NOW).unwrap().unwrap();
    assert_eq!(update.progress_percentage, 90);
    assert!(update.completed_at.is_none());

    let update = progress.mark_complete("l10", NOW).unwrap().unwrap();
    assert_eq!(update.progress_percentage, 100);
    assert_eq!(update.completed_at.as_deref(), Some(NOW));
    assert!(update.certificate_issued);
}

#[test]
fn certificate_flag_is_only_written_at_completion() {
    let partial = serde_json::to_value(EnrollmentProgressUpdate::new(90, NOW)).unwrap();
    assert!(partial.get("certificate_issued").is_none());

    let finished = serde_json::to_value(EnrollmentProgressUpdate::new(100, NOW)).unwrap();
    assert_eq!(finished["certificate_issued"], serde_json::Value::Bool(true));
}

#[test]
fn marking_twice_is_a_no_op() {
    let mut progress = CourseProgress::new(ten_lessons(), &[]);
    assert!(progress.mark_complete("l1", NOW).unwrap().is_some());
    assert_eq!(progress.mark_complete("l1", NOW).unwrap(), None);
    assert_eq!(progress.completed_count(), 1);
}

#[test]
fn marking_unknown_lesson_is_rejected() {
    let mut progress = CourseProgress::new(ten_lessons(), &[]);
    assert_eq!(
        progress.mark_complete("nope", NOW),
        Err(ProgressError::UnknownLesson("nope".to_owned()))
    );
    assert_eq!(progress.percentage(), 0);
}

#[test]
fn foreign_and_incomplete_rows_do_not_count() {
    let mut stale = done("l2");
    stale.completed = false;
    let progress = CourseProgress::new(ten_lessons(), &[done("l1"), stale, done("other-course")]);
    assert_eq!(progress.completed_count(), 1);
    assert_eq!(progress.percentage(), 10);
    assert!(progress.is_completed("l1"));
    assert!(!progress.is_completed("l2"));
}

#[test]
fn percentage_is_non_decreasing_while_marking() {
    let mut progress = CourseProgress::new(ten_lessons(), &[]);
    let mut last = progress.percentage();
    for i in [3, 1, 10, 2, 5, 4, 9, 6, 8, 7] {
        progress.mark_complete(&format!("l{i}"), NOW).unwrap();
        let current = progress.percentage();
        assert!(current >= last);
        last = current;
    }
    assert_eq!(last, 100);
}

#[test]
fn lessons_are_ordered_and_navigable() {
    let lessons = vec![lesson("b", 2), lesson("c", 3), lesson("a", 1)];
    let progress = CourseProgress::new(lessons, &[done("a")]);
    let ids: Vec<&str> = progress.lessons().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(progress.next_incomplete().map(|l| l.id.as_str()), Some("b"));
    assert_eq!(progress.next_after("b").map(|l| l.id.as_str()), Some("c"));
    assert!(progress.next_after("c").is_none());
}

#[test]
fn empty_course_reports_zero_and_no_next() {
    let progress = CourseProgress::new(Vec::new(), &[]);
    assert_eq!(progress.percentage(), 0);
    assert!(progress.next_incomplete().is_none());
}
