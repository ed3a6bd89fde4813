use tracing::{debug, info};

use crate::{
    Answer, AnswerValue, Question, QuestionSet, QuestionSource, QuizError, QuizFrontend,
    QuizResults, QuizSession, QuizState, Unchanged, transition,
};

/// Owns the quiz state and applies transitions to it.
///
/// The controller holds the question data and the current [`QuizState`]
/// snapshot. Every operation computes the next snapshot with a pure
/// transition and swaps it in, so callers never observe a half-applied change.
/// Operations that would not change anything return `Err(Unchanged)` and
/// leave the snapshot as it was.
///
/// ```
/// use quiz_controller::{Question, QuizController};
///
/// let mut quiz = QuizController::from_questions(vec![
///     Question::text("year", 1, "When was Google founded?", "1998"),
/// ])
/// .unwrap();
///
/// quiz.submit_answer("year", " 1998 ").unwrap();
/// assert!(quiz.can_advance());
/// quiz.complete_quiz();
/// assert_eq!(quiz.state().score(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuizController<S = QuestionSet> {
    source: S,
    state: QuizState,
}

impl QuizController<QuestionSet> {
    /// Build a controller over a list of questions, validating their ids and steps.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuizError> {
        Ok(Self::new(QuestionSet::new(questions)?))
    }
}

impl<S: QuestionSource> QuizController<S> {
    /// Create a controller in the initial state.
    pub fn new(source: S) -> Self {
        let state = QuizState::new(source.total_steps());
        info!(total = state.total_questions(), "quiz started");
        Self { source, state }
    }

    /// Get the question data.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Borrow the current snapshot.
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Clone the current snapshot.
    pub fn snapshot(&self) -> QuizState {
        self.state.clone()
    }

    pub fn total_steps(&self) -> usize {
        self.state.total_questions()
    }

    /// The question at the current step, if there is one.
    pub fn current_question(&self) -> Option<&Question> {
        self.source.question_by_step(self.state.current_step())
    }

    /// The recorded answer to the current question.
    pub fn current_answer(&self) -> Option<&Answer> {
        let question = self.current_question()?;
        self.state.answers().get(question.id())
    }

    pub fn is_first_step(&self) -> bool {
        self.state.current_step() == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step() == self.state.total_questions()
    }

    /// Record an answer and its correctness.
    pub fn submit_answer(
        &mut self,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<(), Unchanged> {
        let next = transition::submit_answer(&self.state, &self.source, question_id, value.into());
        self.apply(next)
    }

    /// Move to the next step. Gate this on [`can_advance`](Self::can_advance).
    pub fn advance_step(&mut self) -> Result<(), Unchanged> {
        let next = transition::advance_step(&self.state);
        self.apply(next)
    }

    pub fn retreat_step(&mut self) -> Result<(), Unchanged> {
        let next = transition::retreat_step(&self.state);
        self.apply(next)
    }

    pub fn jump_to_step(&mut self, step: usize) -> Result<(), Unchanged> {
        let next = transition::jump_to_step(&self.state, step);
        self.apply(next)
    }

    /// Whether the current question is answered well enough to move past it.
    pub fn can_advance(&self) -> bool {
        transition::can_advance(&self.state, &self.source)
    }

    /// Score the answers and mark the quiz as completed.
    ///
    /// Unanswered questions are not re-checked; they just do not score.
    pub fn complete_quiz(&mut self) {
        self.state = transition::complete_quiz(&self.state);
        info!(
            score = self.state.score(),
            total = self.state.total_questions(),
            "quiz completed"
        );
    }

    pub fn reset_quiz(&mut self) {
        self.state = transition::reset_quiz(&self.state);
        info!("quiz reset");
    }

    /// Complete the quiz on the last step, otherwise advance.
    ///
    /// This is what a combined "Next / Finish" button does. Like the
    /// operations it wraps, it does not check [`can_advance`](Self::can_advance).
    pub fn next_or_complete(&mut self) -> Result<(), Unchanged> {
        if self.is_last_step() {
            self.complete_quiz();
            Ok(())
        } else {
            self.advance_step()
        }
    }

    /// Summarize the current snapshot for a results screen.
    pub fn results(&self) -> QuizResults {
        QuizResults::from_state(&self.source, &self.state)
    }

    /// Hand the quiz to a frontend and return the results once it is done.
    pub fn run<F: QuizFrontend>(&mut self, frontend: F) -> Result<QuizResults, QuizError> {
        frontend.run(self).map_err(Into::into)?;
        Ok(self.results())
    }

    fn apply(&mut self, next: Result<QuizState, Unchanged>) -> Result<(), Unchanged> {
        match next {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(reason) => {
                debug!(%reason, step = self.state.current_step(), "state unchanged");
                Err(reason)
            }
        }
    }
}

impl<S: QuestionSource> QuizSession for QuizController<S> {
    fn source(&self) -> &dyn QuestionSource {
        &self.source
    }

    fn state(&self) -> &QuizState {
        &self.state
    }

    fn submit_answer(&mut self, question_id: &str, value: AnswerValue) -> Result<(), Unchanged> {
        QuizController::submit_answer(self, question_id, value)
    }

    fn advance_step(&mut self) -> Result<(), Unchanged> {
        QuizController::advance_step(self)
    }

    fn retreat_step(&mut self) -> Result<(), Unchanged> {
        QuizController::retreat_step(self)
    }

    fn jump_to_step(&mut self, step: usize) -> Result<(), Unchanged> {
        QuizController::jump_to_step(self, step)
    }

    fn can_advance(&self) -> bool {
        QuizController::can_advance(self)
    }

    fn complete_quiz(&mut self) {
        QuizController::complete_quiz(self)
    }

    fn reset_quiz(&mut self) {
        QuizController::reset_quiz(self)
    }
}
