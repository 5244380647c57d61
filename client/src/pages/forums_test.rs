use super::*;

fn thread(author: &str) -> ForumThread {
    serde_json::from_value(serde_json::json!({
        "id": "t1",
        "forum_id": "f1",
        "user_id": author,
        "title": "How do lifetimes work?",
        "content": "Asking for a friend.",
        "views_count": 12,
        "replies_count": 3,
        "upvotes_count": 7,
        "downvotes_count": 2
    }))
    .unwrap()
}

fn post(best: bool) -> ForumPost {
    serde_json::from_value(serde_json::json!({
        "id": "p1",
        "thread_id": "t1",
        "user_id": "u2",
        "content": "They describe how long borrows live.",
        "is_best_answer": best
    }))
    .unwrap()
}

#[test]
fn thread_meta_lists_counters() {
    assert_eq!(thread_meta(&thread("u1")), "3 replies · 12 views · score 5");
}

#[test]
fn author_can_mark_best_answer() {
    assert!(can_mark_best(&thread("u1"), &post(false), Some("u1")));
}

#[test]
fn other_users_cannot_mark_best_answer() {
    assert!(!can_mark_best(&thread("u1"), &post(false), Some("u2")));
    assert!(!can_mark_best(&thread("u1"), &post(false), None));
}

#[test]
fn best_answer_cannot_be_marked_twice() {
    assert!(!can_mark_best(&thread("u1"), &post(true), Some("u1")));
}
