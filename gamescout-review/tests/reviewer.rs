use std::cell::RefCell;

use gamescout_core::GameRecord;
use gamescout_review::{ChatBackend, LlmReviewer, ReviewError, ReviewService};

/// Replays scripted answers in order and remembers the prompts it saw.
struct ScriptedBackend {
    answers: RefCell<Vec<Result<String, ReviewError>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    fn new(answers: Vec<Result<String, ReviewError>>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().rev().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl ChatBackend for &ScriptedBackend {
    fn complete(&self, _system: &str, user: &str) -> Result<String, ReviewError> {
        self.prompts.borrow_mut().push(user.to_string());
        self.answers
            .borrow_mut()
            .pop()
            .unwrap_or(Err(ReviewError::EmptyResponse))
    }
}

fn game(title: &str) -> GameRecord {
    GameRecord::new(
        title,
        vec!["PC".to_string()],
        Some("2022-02-25".to_string()),
        vec!["RPG".to_string()],
    )
}

#[test]
fn disabled_reviewer_is_unavailable_and_inert() {
    let reviewer = LlmReviewer::from_key(None, None);
    assert!(!reviewer.is_available());
    assert!(reviewer.generate(&game("Elden Ring")).is_empty());

    let blank = LlmReviewer::from_key(Some("   "), None);
    assert!(!blank.is_available());
}

#[test]
fn key_makes_reviewer_available() {
    let reviewer = LlmReviewer::from_key(Some("sk-test"), Some("some-model"));
    assert!(reviewer.is_available());
}

#[test]
fn structured_answer_becomes_outcome() {
    let backend = ScriptedBackend::new(vec![Ok(
        r#"{"review": "Vast and punishing.", "rating": 9}"#.to_string(),
    )]);
    let reviewer = LlmReviewer::with_backend(&backend);

    let outcome = reviewer.generate(&game("Elden Ring"));

    assert_eq!(outcome.review_text.as_deref(), Some("Vast and punishing."));
    assert_eq!(outcome.rating.map(|r| r.get()), Some(9));
    assert_eq!(backend.prompts.borrow().len(), 1);
    assert!(backend.prompts.borrow()[0].contains("\"Elden Ring\""));
}

#[test]
fn failures_are_isolated_per_record() {
    let backend = ScriptedBackend::new(vec![
        Err(ReviewError::Status {
            status: 500,
            message: "down".to_string(),
        }),
        Ok("{\"review\": oops".to_string()),
        Ok("REVIEW: Still good.\nRATING: 7".to_string()),
    ]);
    let reviewer = LlmReviewer::with_backend(&backend);

    let first = reviewer.generate(&game("One"));
    let second = reviewer.generate(&game("Two"));
    let third = reviewer.generate(&game("Three"));

    assert!(first.is_empty());
    assert!(second.is_empty());
    assert_eq!(third.review_text.as_deref(), Some("Still good."));
    assert_eq!(third.rating.map(|r| r.get()), Some(7));
    assert_eq!(backend.prompts.borrow().len(), 3);
}
