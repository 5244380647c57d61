use super::*;

fn lesson(id: &str, order_index: i64) -> Lesson {
    Lesson {
        id: id.to_owned(),
        course_id: Some("c-1".to_owned()),
        module_id: None,
        title: format!("Lesson {id}"),
        content_type: LessonKind::Video,
        duration: Some(10),
        order_index,
        video_url: None,
        content: None,
    }
}

fn module(id: &str, order_index: i64) -> Module {
    Module {
        id: id.to_owned(),
        course_id: "c-1".to_owned(),
        title: format!("Module {id}"),
        description: None,
        order_index,
    }
}

#[test]
fn course_decodes_sparse_row_with_defaults() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": "c-1",
        "title": "Rust 101",
        "price": 49,
        "description": null,
        "average_rating": null
    }))
    .unwrap();
    assert_eq!(course.title, "Rust 101");
    assert!((course.price - 49.0).abs() < f64::EPSILON);
    assert!(course.description.is_empty());
    assert_eq!(course.average_rating, 0.0);
    assert_eq!(course.review_count, 0);
    assert!(!course.is_free());
}

#[test]
fn course_thumbnail_ignores_blank_urls() {
    let mut course: Course = serde_json::from_value(serde_json::json!({"id": "c", "title": "t"})).unwrap();
    assert!(course.thumbnail().is_none());
    course.thumbnail_url = Some("  ".to_owned());
    assert!(course.thumbnail().is_none());
    course.thumbnail_url = Some("https://cdn/x.png".to_owned());
    assert_eq!(course.thumbnail(), Some("https://cdn/x.png"));
}

#[test]
fn lesson_kind_tolerates_unknown_values() {
    assert_eq!(serde_json::from_str::<LessonKind>("\"text\"").unwrap(), LessonKind::Text);
    assert_eq!(serde_json::from_str::<LessonKind>("\"assignment\"").unwrap(), LessonKind::Other);
    assert_eq!(LessonKind::Other.label(), "Lesson");
}

#[test]
fn ordered_lessons_sorts_by_order_index() {
    let details = CourseDetails {
        course: serde_json::from_value(serde_json::json!({"id": "c-1", "title": "t"})).unwrap(),
        lessons: vec![lesson("b", 2), lesson("a", 1), lesson("c", 3)],
    };
    let ids: Vec<String> = details.ordered_lessons().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(details.total_minutes(), 30);
}

#[test]
fn group_by_module_keeps_module_order_and_collects_loose_lessons() {
    let modules = vec![module("m2", 2), module("m1", 1)];
    let mut first = lesson("l1", 2);
    first.module_id = Some("m1".to_owned());
    let mut second = lesson("l2", 1);
    second.module_id = Some("m1".to_owned());
    let mut third = lesson("l3", 1);
    third.module_id = Some("m2".to_owned());
    let mut orphan = lesson("l4", 1);
    orphan.module_id = Some("gone".to_owned());
    let loose = lesson("l5", 0);

    let groups = group_by_module(&modules, &[first, second, third, orphan, loose]);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].0.as_ref().map(|m| m.id.as_str()), Some("m1"));
    let m1_ids: Vec<&str> = groups[0].1.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(m1_ids, vec!["l2", "l1"]);
    assert_eq!(groups[1].1.len(), 1);
    assert!(groups[2].0.is_none());
    let loose_ids: Vec<&str> = groups[2].1.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(loose_ids, vec!["l5", "l4"]);
}

#[test]
fn format_minutes_switches_to_hours() {
    assert_eq!(format_minutes(12), "12 min");
    assert_eq!(format_minutes(65), "1h 05m");
    assert_eq!(format_minutes(120), "2h 00m");
}
