//! Test frontend for driving a quiz without user interaction.
//!
//! `TestFrontend` replays a scripted list of user actions against a quiz
//! session, the way a real frontend would forward button presses.
//!
//! # Example
//!
//! ```rust
//! use quiz_controller::{Question, QuizController, TestFrontend};
//!
//! let mut quiz = QuizController::from_questions(vec![
//!     Question::text("capital", 1, "Capital of Spain?", "madrid"),
//!     Question::text("year", 2, "When was Google founded?", "1998"),
//! ])
//! .unwrap();
//!
//! let results = quiz
//!     .run(
//!         TestFrontend::new()
//!             .answer("capital", "Madrid")
//!             .next()
//!             .answer("year", "2001")
//!             .finish(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(results.score, 1);
//! ```

use crate::{AnswerValue, QuizError, QuizFrontend, QuizSession, Unchanged};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Submit an answer to the question with this id.
    Answer(String, AnswerValue),
    /// Press "Next" (only allowed when the current question can be passed).
    Next,
    /// Press "Previous".
    Previous,
    /// Jump straight to a step.
    Jump(usize),
    /// Press "Finish" (only allowed when the current question can be passed).
    Finish,
    /// Press "Start again".
    Reset,
}

/// A frontend that replays pre-configured actions.
#[derive(Debug, Clone, Default)]
pub struct TestFrontend {
    actions: Vec<Action>,
}

/// Error type for TestFrontend.
#[derive(Debug, thiserror::Error)]
pub enum TestFrontendError {
    #[error("Cannot move past step {step}: the question needs an answer")]
    Blocked { step: usize },

    #[error("Action {index} had no effect: {reason}")]
    Unchanged { index: usize, reason: Unchanged },
}

impl From<TestFrontendError> for QuizError {
    fn from(err: TestFrontendError) -> Self {
        QuizError::frontend(err)
    }
}

impl TestFrontend {
    /// Create a new test frontend with no actions.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Add an action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Submit an answer.
    pub fn answer(self, question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.with_action(Action::Answer(question_id.into(), value.into()))
    }

    pub fn next(self) -> Self {
        self.with_action(Action::Next)
    }

    pub fn previous(self) -> Self {
        self.with_action(Action::Previous)
    }

    pub fn jump_to(self, step: usize) -> Self {
        self.with_action(Action::Jump(step))
    }

    pub fn finish(self) -> Self {
        self.with_action(Action::Finish)
    }

    pub fn reset(self) -> Self {
        self.with_action(Action::Reset)
    }
}

impl QuizFrontend for TestFrontend {
    type Error = TestFrontendError;

    fn run(&self, session: &mut dyn QuizSession) -> Result<(), Self::Error> {
        for (index, action) in self.actions.iter().enumerate() {
            let outcome = match action {
                Action::Answer(question_id, value) => {
                    session.submit_answer(question_id, value.clone())
                }
                Action::Next => {
                    ensure_can_advance(session)?;
                    session.advance_step()
                }
                Action::Previous => session.retreat_step(),
                Action::Jump(step) => session.jump_to_step(*step),
                Action::Finish => {
                    ensure_can_advance(session)?;
                    session.complete_quiz();
                    Ok(())
                }
                Action::Reset => {
                    session.reset_quiz();
                    Ok(())
                }
            };

            outcome.map_err(|reason| TestFrontendError::Unchanged { index, reason })?;
        }

        Ok(())
    }
}

fn ensure_can_advance(session: &dyn QuizSession) -> Result<(), TestFrontendError> {
    if session.can_advance() {
        Ok(())
    } else {
        Err(TestFrontendError::Blocked {
            step: session.state().current_step(),
        })
    }
}
