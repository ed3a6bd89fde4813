use crate::Answers;

/// An immutable snapshot of a quiz in progress.
///
/// Snapshots are produced by the functions in [`crate::transition`]; a
/// transition never modifies a snapshot, it returns a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    current_step: usize,
    answers: Answers,
    is_completed: bool,
    score: usize,
    total_questions: usize,
}

impl QuizState {
    /// The initial state: step 1, no answers, not completed, score 0.
    pub fn new(total_questions: usize) -> Self {
        Self {
            current_step: 1,
            answers: Answers::new(),
            is_completed: false,
            score: 0,
            total_questions,
        }
    }

    /// The 1-based step being shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// The score frozen at completion; 0 before that.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub(crate) fn with_step(&self, current_step: usize) -> Self {
        Self {
            current_step,
            ..self.clone()
        }
    }

    pub(crate) fn with_answers(&self, answers: Answers) -> Self {
        Self {
            answers,
            ..self.clone()
        }
    }

    pub(crate) fn completed(&self, score: usize) -> Self {
        Self {
            is_completed: true,
            score,
            ..self.clone()
        }
    }
}
