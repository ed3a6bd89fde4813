use crate::{AnswerValue, Question, QuizError, QuizState, Unchanged};

/// Read access to the fixed question data a quiz runs over.
///
/// Steps are 1-based and contiguous: every step in `1..=total_steps()` has a
/// question.
pub trait QuestionSource {
    /// Get the question shown at the given step.
    fn question_by_step(&self, step: usize) -> Option<&Question>;

    /// Get the number of steps (questions).
    fn total_steps(&self) -> usize;

    /// Get the question with the given id.
    ///
    /// The default implementation scans all steps.
    fn question_by_id(&self, id: &str) -> Option<&Question> {
        (1..=self.total_steps())
            .filter_map(|step| self.question_by_step(step))
            .find(|question| question.id() == id)
    }

    /// Get all questions in step order.
    fn questions(&self) -> Vec<&Question> {
        (1..=self.total_steps())
            .filter_map(|step| self.question_by_step(step))
            .collect()
    }
}

impl<S: QuestionSource + ?Sized> QuestionSource for &S {
    fn question_by_step(&self, step: usize) -> Option<&Question> {
        (**self).question_by_step(step)
    }

    fn total_steps(&self) -> usize {
        (**self).total_steps()
    }

    fn question_by_id(&self, id: &str) -> Option<&Question> {
        (**self).question_by_id(id)
    }
}

/// The command and snapshot surface a frontend drives.
///
/// Implemented by the quiz controller. Frontends only read snapshots and issue
/// commands through this trait; they never touch the state directly.
pub trait QuizSession {
    /// The questions this session runs over.
    fn source(&self) -> &dyn QuestionSource;

    /// The current state snapshot.
    fn state(&self) -> &QuizState;

    /// Record an answer. `Err` if no question has that id.
    fn submit_answer(&mut self, question_id: &str, value: AnswerValue) -> Result<(), Unchanged>;

    /// Move to the next step. `Err` at the last step.
    fn advance_step(&mut self) -> Result<(), Unchanged>;

    /// Move to the previous step. `Err` at the first step.
    fn retreat_step(&mut self) -> Result<(), Unchanged>;

    /// Move to the given step. `Err` if the step is out of range.
    fn jump_to_step(&mut self, step: usize) -> Result<(), Unchanged>;

    /// Whether the current question is answered well enough to move on.
    fn can_advance(&self) -> bool;

    /// Score the answers and mark the quiz as completed.
    fn complete_quiz(&mut self);

    /// Go back to the initial state.
    fn reset_quiz(&mut self);

    /// The question at the current step.
    fn current_question(&self) -> Option<&Question> {
        self.source().question_by_step(self.state().current_step())
    }

    fn is_first_step(&self) -> bool {
        self.state().current_step() == 1
    }

    fn is_last_step(&self) -> bool {
        self.state().current_step() == self.state().total_questions()
    }
}

/// Trait for frontends that present a quiz to the user.
///
/// Frontends receive a session, render its snapshots, and forward user actions
/// as commands. They are expected to gate `advance_step` and `complete_quiz`
/// on `can_advance`; the session itself only enforces step bounds.
pub trait QuizFrontend {
    /// The error type for this frontend.
    type Error: Into<QuizError>;

    /// Run the quiz until the user is done with it.
    ///
    /// # Returns
    /// * `Ok(())` when the user leaves the quiz (usually after completing it)
    /// * `Err` on cancellation or frontend failure
    fn run(&self, session: &mut dyn QuizSession) -> Result<(), Self::Error>;
}
