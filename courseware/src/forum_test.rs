use super::*;

#[test]
fn thread_detail_decodes_posts_and_author() {
    let thread: ForumThread = serde_json::from_value(serde_json::json!({
        "id": "t-1",
        "forum_id": "f-1",
        "user_id": "u-1",
        "title": "Ownership question",
        "content": "Why does this move?",
        "upvotes_count": 5,
        "downvotes_count": 2,
        "users": {"full_name": "Ada", "avatar_url": null},
        "posts": [
            {"id": "p-1", "thread_id": "t-1", "user_id": "u-2", "content": "Because Copy", "is_best_answer": true},
            {"id": "p-2", "thread_id": "t-1", "user_id": "u-3", "content": "+1"}
        ]
    }))
    .unwrap();
    assert_eq!(thread.score(), 3);
    assert_eq!(Author::display_name(thread.author.as_ref()), "Ada");
    assert_eq!(thread.best_answer().map(|p| p.id.as_str()), Some("p-1"));
    assert_eq!(thread.posts[1].score(), 0);
}

#[test]
fn thread_list_entry_has_no_posts() {
    let thread: ForumThread = serde_json::from_value(serde_json::json!({
        "id": "t-1", "forum_id": "f-1", "user_id": "u-1", "title": "Hi"
    }))
    .unwrap();
    assert!(thread.posts.is_empty());
    assert!(thread.best_answer().is_none());
    assert_eq!(Author::display_name(thread.author.as_ref()), "Anonymous");
}

#[test]
fn vote_score_can_go_negative() {
    assert_eq!(vote_score(1, 4), -3);
}

#[test]
fn thread_sort_round_trips_query_param() {
    for sort in ThreadSort::ALL {
        assert_eq!(ThreadSort::from_param(sort.as_param()), sort);
    }
    assert_eq!(ThreadSort::from_param("weird"), ThreadSort::Recent);
    assert_eq!(ThreadSort::MostReplied.as_param(), "most_replied");
}

#[test]
fn vote_request_uses_lowercase_wire_names() {
    let body = VoteRequest {
        user_id: "u".to_owned(),
        votable_type: VotableType::Post,
        votable_id: "p-1".to_owned(),
        vote_type: VoteType::Downvote,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"user_id": "u", "votable_type": "post", "votable_id": "p-1", "vote_type": "downvote"})
    );
}

#[test]
fn vote_outcome_decodes_removed_toggle() {
    let outcome: VoteOutcome = serde_json::from_str(r#"{"action":"removed","vote_type":"upvote"}"#).unwrap();
    assert_eq!(outcome.action, VoteAction::Removed);
    assert_eq!(outcome.vote_type, VoteType::Upvote);
}

#[test]
fn new_thread_requires_title_and_content() {
    assert!(NewThread::new("f", "u", "  ", "body").is_err());
    assert!(NewThread::new("f", "u", "title", "\n").is_err());
    let thread = NewThread::new("f", "u", " Title ", " Body ").unwrap();
    assert_eq!(thread.title, "Title");
    assert_eq!(thread.content, "Body");
}

#[test]
fn new_post_requires_content() {
    assert_eq!(NewPost::new("t", "u", "   "), Err("Write a reply first."));
    assert_eq!(NewPost::new("t", "u", " ok ").unwrap().content, "ok");
}
