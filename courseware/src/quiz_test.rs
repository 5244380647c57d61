use super::*;

fn question(id: &str, options: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.to_owned(),
        question: format!("Question {id}?"),
        options: (0..options).map(|i| format!("Option {i}")).collect(),
    }
}

fn quiz(questions: Vec<QuizQuestion>) -> QuizDetail {
    QuizDetail {
        id: "quiz-1".to_owned(),
        title: "Python Basics Quiz".to_owned(),
        description: None,
        duration: Some("20 min".to_owned()),
        passing_score: 70,
        questions,
    }
}

fn result(passed: bool) -> QuizResult {
    QuizResult {
        quiz_id: "quiz-1".to_owned(),
        score: 80,
        percentage: 80,
        passed,
        total_questions: 2,
        correct_answers: 2,
        submitted_at: None,
    }
}

#[test]
fn default_session_is_on_the_list() {
    let session = QuizSession::default();
    assert_eq!(session.phase(), &QuizPhase::List);
    assert!(!session.can_submit());
    assert_eq!(session.question_count(), 0);
}

#[test]
fn submit_is_disabled_until_every_question_is_answered() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 4), question("q2", 4), question("q3", 2)]));
    assert!(!session.can_submit());
    session.select("q1", 0).unwrap();
    assert!(!session.can_submit());
    session.select("q2", 3).unwrap();
    assert_eq!(session.answered_count(), 2);
    assert!(!session.can_submit());
    session.select("q3", 1).unwrap();
    assert!(session.can_submit());
}

#[test]
fn changing_an_answer_does_not_inflate_the_count() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 4), question("q2", 4)]));
    session.select("q1", 0).unwrap();
    session.select("q1", 2).unwrap();
    assert_eq!(session.answered_count(), 1);
    assert_eq!(session.answer_for("q1"), Some(2));
    assert!(!session.can_submit());
}

#[test]
fn empty_quiz_cannot_be_submitted() {
    let mut session = QuizSession::start(quiz(Vec::new()));
    assert!(!session.can_submit());
    assert_eq!(
        session.submit("u-1"),
        Err(QuizError::Incomplete { answered: 0, total: 0 })
    );
}

#[test]
fn select_rejects_unknown_question_and_out_of_range_option() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 2)]));
    assert_eq!(session.select("q9", 0), Err(QuizError::UnknownQuestion("q9".to_owned())));
    assert_eq!(
        session.select("q1", 2),
        Err(QuizError::OptionOutOfRange {
            question_id: "q1".to_owned(),
            option: 2
        })
    );
    assert_eq!(session.answered_count(), 0);
}

#[test]
fn incomplete_submit_is_rejected_and_stays_in_progress() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 2), question("q2", 2)]));
    session.select("q1", 1).unwrap();
    assert_eq!(
        session.submit("u-1"),
        Err(QuizError::Incomplete { answered: 1, total: 2 })
    );
    assert_eq!(session.phase(), &QuizPhase::InProgress);
}

#[test]
fn full_attempt_reaches_result() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 2), question("q2", 2)]));
    session.select("q1", 0).unwrap();
    session.select("q2", 1).unwrap();

    let submission = session.submit("u-1").unwrap();
    assert_eq!(submission.quiz_id, "quiz-1");
    assert_eq!(submission.user_id, "u-1");
    assert_eq!(
        serde_json::to_value(&submission).unwrap()["answers"],
        serde_json::json!({"q1": 0, "q2": 1})
    );
    assert_eq!(session.phase(), &QuizPhase::Submitted);
    assert!(!session.can_submit());
    assert_eq!(session.select("q1", 1), Err(QuizError::WrongPhase));

    session.complete(result(true)).unwrap();
    assert!(matches!(session.phase(), QuizPhase::Result(r) if r.passed));
}

#[test]
fn failed_submission_returns_to_in_progress_with_answers() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 2)]));
    session.select("q1", 1).unwrap();
    session.submit("u-1").unwrap();
    session.submission_failed();
    assert_eq!(session.phase(), &QuizPhase::InProgress);
    assert_eq!(session.answer_for("q1"), Some(1));
    assert!(session.can_submit());
}

#[test]
fn complete_requires_a_submission_in_flight() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 2)]));
    assert_eq!(session.complete(result(false)), Err(QuizError::WrongPhase));
}

#[test]
fn retake_clears_answers_and_exit_returns_to_list() {
    let mut session = QuizSession::start(quiz(vec![question("q1", 2)]));
    session.select("q1", 0).unwrap();
    session.submit("u-1").unwrap();
    session.complete(result(false)).unwrap();

    session.retake();
    assert_eq!(session.phase(), &QuizPhase::InProgress);
    assert_eq!(session.answered_count(), 0);

    session.exit();
    assert_eq!(session, QuizSession::default());
}

#[test]
fn quiz_result_decodes_backend_shape() {
    let parsed: QuizResult = serde_json::from_value(serde_json::json!({
        "quiz_id": "1",
        "score": 0,
        "percentage": 0,
        "passed": false,
        "total_questions": 2,
        "correct_answers": 0,
        "submitted_at": "2026-10-16T10:00:00"
    }))
    .unwrap();
    assert!(!parsed.passed);
    assert_eq!(parsed.total_questions, 2);
}
