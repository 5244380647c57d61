use courseware::quiz::{QuizDetail, QuizQuestion};

use super::*;

fn result(passed: bool, correct: i64) -> QuizResult {
    QuizResult {
        quiz_id: "q1".to_owned(),
        score: correct,
        percentage: correct * 10,
        passed,
        total_questions: 10,
        correct_answers: correct,
        submitted_at: None,
    }
}

#[test]
fn passing_headline() {
    assert_eq!(result_headline(&result(true, 8)), "Passed! 8 of 10 correct (80%)");
}

#[test]
fn failing_headline() {
    assert_eq!(result_headline(&result(false, 5)), "Not quite. 5 of 10 correct (50%)");
}

#[test]
fn answered_label_tracks_selection() {
    let mut session = QuizSession::start(QuizDetail {
        id: "q1".to_owned(),
        title: "Basics".to_owned(),
        description: None,
        duration: None,
        passing_score: 70,
        questions: vec![
            QuizQuestion {
                id: "a".to_owned(),
                question: "1 + 1?".to_owned(),
                options: vec!["1".to_owned(), "2".to_owned()],
            },
            QuizQuestion {
                id: "b".to_owned(),
                question: "2 + 2?".to_owned(),
                options: vec!["4".to_owned(), "5".to_owned()],
            },
        ],
    });
    assert_eq!(answered_label(&session), "0 of 2 answered");
    session.select("a", 1).unwrap();
    assert_eq!(answered_label(&session), "1 of 2 answered");
    assert!(!session.can_submit());
}
