//! # quiz-wizard-dialoguer
//!
//! Dialoguer wizard frontend for quiz-controller.
//!
//! This crate presents a quiz in the terminal one question at a time using the
//! `dialoguer` library: a progress line, the question, an answer prompt that
//! fits the question kind, optional immediate feedback, and a navigation menu.
//! When the quiz is completed it prints the results and offers to start again.
//!
//! ## Example
//!
//! ```rust,ignore
//! use quiz_controller::QuizController;
//! use quiz_wizard_dialoguer::DialoguerFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut quiz = QuizController::new(example_quizzes::general_knowledge()?);
//!     let results = quiz.run(DialoguerFrontend::new())?;
//!     println!("{} of {}", results.score, results.total_questions);
//!     Ok(())
//! }
//! ```

mod frontend;

pub use frontend::{DialoguerFrontend, DialoguerFrontendError, Navigation};
