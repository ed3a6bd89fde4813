/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// User cancelled the quiz (Ctrl+C, closed window, etc.)
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// The questions do not form a valid quiz.
    #[error("Invalid questions: {0}")]
    InvalidQuestions(#[from] QuestionSetError),

    /// Frontend-specific failure (I/O, UI framework crash, etc.)
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl QuizError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Why a list of questions was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionSetError {
    #[error("A quiz needs at least one question")]
    Empty,

    #[error("Duplicate question id '{0}'")]
    DuplicateId(String),

    #[error("Step {step} is used by both '{first}' and '{second}'")]
    DuplicateStep {
        step: usize,
        first: String,
        second: String,
    },

    #[error("Steps must run from 1 to {total} without gaps, but step {missing} is missing")]
    MissingStep { missing: usize, total: usize },
}

/// Why a transition left the quiz state untouched.
///
/// Invalid navigation and answers to unknown questions are not failures; the
/// state simply stays as it was. This value says which case it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unchanged {
    #[error("No question with id '{0}'")]
    UnknownQuestion(String),

    #[error("Already at the last step")]
    AtLastStep,

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Step {step} is outside 1..={total}")]
    StepOutOfRange { step: usize, total: usize },
}
