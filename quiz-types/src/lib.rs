//! Core types for the quiz-controller crate.
//!
//! This crate provides the foundational types for running a quiz:
//! - `Question` and `QuestionKind` - Individual questions and their correct answers
//! - `QuestionSet` - The validated, ordered list of questions
//! - `AnswerValue`, `Answer` and `Answers` - What the user submitted
//! - `QuizState` and the `transition` functions - Snapshots and how they change
//! - `QuestionSource`, `QuizSession` and `QuizFrontend` traits - For data and frontends

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{Answer, Answers};

mod compare;
pub use compare::compare_answers;

mod question;
pub use question::{
    MultipleChoiceQuestion, Question, QuestionKind, QuestionOption, SingleChoiceQuestion,
    TextQuestion,
};

mod question_set;
pub use question_set::QuestionSet;

mod state;
pub use state::QuizState;

pub mod transition;

mod error;
pub use error::{QuestionSetError, QuizError, Unchanged};

mod traits;
pub use traits::{QuestionSource, QuizFrontend, QuizSession};
