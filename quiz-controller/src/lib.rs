//! # quiz-controller
//!
//! A step-by-step quiz: questions are answered one step at a time, each answer
//! is checked against the correct one when it is submitted, and the quiz is
//! scored on completion. Frontend-agnostic.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_controller::{Question, QuestionOption, QuizController};
//!
//! let mut quiz = QuizController::from_questions(vec![
//!     Question::single(
//!         "capital",
//!         1,
//!         "What is the capital of Spain?",
//!         vec![
//!             QuestionOption::keyed("barcelona", "Barcelona"),
//!             QuestionOption::keyed("madrid", "Madrid"),
//!         ],
//!         "madrid",
//!     ),
//!     Question::multiple(
//!         "languages",
//!         2,
//!         "Which of these are programming languages?",
//!         vec![
//!             QuestionOption::keyed("javascript", "JavaScript"),
//!             QuestionOption::keyed("html", "HTML"),
//!             QuestionOption::keyed("python", "Python"),
//!         ],
//!         ["javascript", "python"],
//!     ),
//! ])
//! .unwrap();
//!
//! quiz.submit_answer("capital", "madrid").unwrap();
//! if quiz.can_advance() {
//!     quiz.advance_step().unwrap();
//! }
//! quiz.submit_answer("languages", vec!["python", "javascript"]).unwrap();
//! quiz.complete_quiz();
//!
//! assert_eq!(quiz.state().score(), 2);
//! ```
//!
//! ## Navigation
//!
//! The controller only enforces step bounds. Moving past an unanswered
//! required question is prevented by the frontend, which checks
//! `can_advance()` before calling `advance_step()` or `complete_quiz()`.
//! Out-of-range moves return `Err(Unchanged)` and leave the state as it was.
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `QuizFrontend`:
//! - `quiz-wizard-dialoguer` - CLI wizard via dialoguer
//!
//! `TestFrontend` replays scripted actions for tests.

// Re-export all types from quiz-types
pub use quiz_types::*;

mod controller;
pub use controller::QuizController;

mod results;
pub use results::{Grade, QuestionReview, QuizResults, Verdict};

// Test frontend for testing quizzes without user interaction
mod test_frontend;
pub use test_frontend::{Action, TestFrontend, TestFrontendError};
