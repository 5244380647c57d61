use super::*;

fn lesson(id: &str, order: i64) -> Lesson {
    Lesson {
        id: id.to_owned(),
        course_id: Some("c1".to_owned()),
        module_id: None,
        title: format!("Lesson {id}"),
        content_type: LessonKind::Text,
        duration: None,
        order_index: order,
        video_url: None,
        content: None,
    }
}

#[test]
fn youtube_watch_links_become_embeds() {
    assert_eq!(
        embed_url("https://www.youtube.com/watch?v=abc123&t=10").as_deref(),
        Some("https://www.youtube.com/embed/abc123")
    );
    assert_eq!(embed_url("https://youtu.be/xyz?t=3").as_deref(), Some("https://www.youtube.com/embed/xyz"));
}

#[test]
fn embed_links_pass_through() {
    assert_eq!(
        embed_url("https://www.youtube.com/embed/abc").as_deref(),
        Some("https://www.youtube.com/embed/abc")
    );
}

#[test]
fn vimeo_ids_become_player_links() {
    assert_eq!(embed_url("https://vimeo.com/76979871").as_deref(), Some("https://player.vimeo.com/video/76979871"));
}

#[test]
fn plain_files_are_not_embedded() {
    assert_eq!(embed_url("https://cdn.example.com/intro.mp4"), None);
    assert_eq!(embed_url("intro.mp4"), None);
    assert_eq!(embed_url("https://www.youtube.com/watch?list=x"), None);
}

#[test]
fn position_label_counts_from_one() {
    let lessons = vec![lesson("a", 1), lesson("b", 2), lesson("c", 3)];
    assert_eq!(position_label(&lessons, "b"), "Lesson 2 of 3");
    assert_eq!(position_label(&lessons, "zzz"), "");
}

#[test]
fn completing_eighth_of_ten_lessons_reaches_eighty_percent() {
    let lessons: Vec<Lesson> = (1..=10).map(|i| lesson(&format!("l{i}"), i)).collect();
    let rows: Vec<LessonProgress> = (1..=7)
        .map(|i| LessonProgress {
            id: None,
            enrollment_id: "e1".to_owned(),
            lesson_id: format!("l{i}"),
            completed: true,
            completed_at: None,
            last_accessed_at: None,
        })
        .collect();
    let mut progress = CourseProgress::new(lessons, &rows);
    assert_eq!(progress.percentage(), 70);
    let update = progress.mark_complete("l8", "2026-10-16T10:00:00Z").unwrap().unwrap();
    assert_eq!(update.progress_percentage, 80);
    assert_eq!(update.completed_at, None);
    assert_eq!(progress.next_after("l8").map(|l| l.id.as_str()), Some("l9"));
}
