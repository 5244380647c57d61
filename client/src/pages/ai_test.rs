use super::*;

fn question(correct: &str) -> GeneratedQuestion {
    GeneratedQuestion {
        question: "Which keyword moves ownership into a closure?".to_owned(),
        options: vec!["ref".to_owned(), "move".to_owned(), "mut".to_owned()],
        correct_answer: correct.to_owned(),
        explanation: String::new(),
    }
}

#[test]
fn preference_weights_clamp_to_percent() {
    assert_eq!(preference_percent(70.0), 70);
    assert_eq!(preference_percent(79.6), 80);
    assert_eq!(preference_percent(150.0), 100);
    assert_eq!(preference_percent(-5.0), 0);
    assert_eq!(preference_percent(f64::NAN), 0);
}

#[test]
fn match_label_reads_as_percent() {
    assert_eq!(match_label(92), "92% match");
}

#[test]
fn feedback_confirms_correct_pick() {
    assert_eq!(answer_feedback(&question("B"), 1), "Correct!");
}

#[test]
fn feedback_names_the_right_letter() {
    assert_eq!(answer_feedback(&question("b"), 0), "Not quite. The answer is B.");
}

#[test]
fn feedback_without_answer_key() {
    assert_eq!(
        answer_feedback(&question("Z"), 0),
        "No answer key was provided for this question."
    );
}

#[test]
fn option_letters_follow_alphabet() {
    assert_eq!(option_letter(0), 'A');
    assert_eq!(option_letter(3), 'D');
}
