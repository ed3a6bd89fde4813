//! Pure transition functions over [`QuizState`] snapshots.
//!
//! Each function reads a snapshot and returns the next one. Navigation that
//! would leave the step range and answers to unknown questions return
//! `Err(Unchanged)`; the input snapshot is then still the current state.

use tracing::{debug, trace};

use crate::{Answer, AnswerValue, QuestionSource, QuizState, Unchanged, compare_answers};

/// Record an answer to the question with the given id.
///
/// Correctness is computed here, once, against the question's correct answer.
/// A later submission for the same question replaces the earlier one.
pub fn submit_answer<S: QuestionSource + ?Sized>(
    state: &QuizState,
    source: &S,
    question_id: &str,
    value: AnswerValue,
) -> Result<QuizState, Unchanged> {
    let Some(question) = source.question_by_id(question_id) else {
        trace!(question_id, "answer for unknown question ignored");
        return Err(Unchanged::UnknownQuestion(question_id.to_string()));
    };

    let is_correct = compare_answers(&value, &question.correct_answer());
    debug!(
        question_id,
        kind = question.kind().type_name(),
        value_type = value.type_name(),
        is_correct,
        value = %value,
        "answer recorded"
    );

    let mut answers = state.answers().clone();
    answers.insert(Answer::new(question.id(), value, is_correct));
    Ok(state.with_answers(answers))
}

/// Move one step forward. Does not look at the current answer; see [`can_advance`].
pub fn advance_step(state: &QuizState) -> Result<QuizState, Unchanged> {
    if state.current_step() >= state.total_questions() {
        trace!(step = state.current_step(), "advance ignored at last step");
        return Err(Unchanged::AtLastStep);
    }
    let step = state.current_step() + 1;
    debug!(step, "advanced");
    Ok(state.with_step(step))
}

/// Move one step back.
pub fn retreat_step(state: &QuizState) -> Result<QuizState, Unchanged> {
    if state.current_step() <= 1 {
        trace!(step = state.current_step(), "retreat ignored at first step");
        return Err(Unchanged::AtFirstStep);
    }
    let step = state.current_step() - 1;
    debug!(step, "retreated");
    Ok(state.with_step(step))
}

/// Move to an absolute step in `1..=total_questions`.
pub fn jump_to_step(state: &QuizState, step: usize) -> Result<QuizState, Unchanged> {
    let total = state.total_questions();
    if !(1..=total).contains(&step) {
        trace!(step, total, "jump out of range ignored");
        return Err(Unchanged::StepOutOfRange { step, total });
    }
    debug!(step, "jumped");
    Ok(state.with_step(step))
}

/// Whether the current question is answered well enough to move past it.
///
/// Optional questions can always be passed. A required multiple-choice
/// question needs a non-empty selection; any other required question needs a
/// non-empty value. If there is no question at the current step this is
/// `false`.
pub fn can_advance<S: QuestionSource + ?Sized>(state: &QuizState, source: &S) -> bool {
    let Some(question) = source.question_by_step(state.current_step()) else {
        return false;
    };
    if !question.is_required() {
        return true;
    }
    let Some(answer) = state.answers().get(question.id()) else {
        return false;
    };

    if question.kind().is_multiple() {
        matches!(&answer.value, AnswerValue::StringList(selected) if !selected.is_empty())
    } else {
        !answer.value.is_empty()
    }
}

/// Score the recorded answers and mark the quiz as completed.
///
/// The score is the number of answers flagged correct. Unanswered questions
/// simply do not count.
pub fn complete_quiz(state: &QuizState) -> QuizState {
    state.completed(state.answers().correct_count())
}

/// Return to the initial state for the same number of questions.
pub fn reset_quiz(state: &QuizState) -> QuizState {
    QuizState::new(state.total_questions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Question, QuestionOption, QuestionSet};

    fn quiz() -> QuestionSet {
        QuestionSet::new(vec![
            Question::single(
                "capital",
                1,
                "Capital of Spain?",
                vec![
                    QuestionOption::keyed("barcelona", "Barcelona"),
                    QuestionOption::keyed("madrid", "Madrid"),
                ],
                "madrid",
            ),
            Question::multiple(
                "languages",
                2,
                "Programming languages?",
                vec![
                    QuestionOption::keyed("javascript", "JavaScript"),
                    QuestionOption::keyed("html", "HTML"),
                    QuestionOption::keyed("python", "Python"),
                ],
                ["javascript", "python"],
            ),
            Question::text("year", 3, "Founding year?", "1998").optional(),
        ])
        .unwrap()
    }

    #[test]
    fn initial_state() {
        let state = QuizState::new(3);
        assert_eq!(state.current_step(), 1);
        assert!(state.answers().is_empty());
        assert!(!state.is_completed());
        assert_eq!(state.score(), 0);
        assert_eq!(state.total_questions(), 3);
    }

    #[test]
    fn submit_computes_correctness() {
        let set = quiz();
        let state = QuizState::new(3);

        let state = submit_answer(&state, &set, "capital", " Madrid".into()).unwrap();
        assert!(state.answers().get("capital").unwrap().is_correct);

        let state =
            submit_answer(&state, &set, "languages", vec!["python", "javascript"].into()).unwrap();
        assert!(state.answers().get("languages").unwrap().is_correct);
    }

    #[test]
    fn resubmission_replaces_the_flag() {
        let set = quiz();
        let state = QuizState::new(3);
        let state = submit_answer(&state, &set, "capital", "madrid".into()).unwrap();
        let state = submit_answer(&state, &set, "capital", "barcelona".into()).unwrap();

        let answer = state.answers().get("capital").unwrap();
        assert!(!answer.is_correct);
        assert_eq!(answer.value, AnswerValue::from("barcelona"));
        assert_eq!(state.answers().len(), 1);
    }

    #[test]
    fn submit_to_unknown_question_leaves_state_alone() {
        let set = quiz();
        let state = QuizState::new(3);
        assert_eq!(
            submit_answer(&state, &set, "nope", "x".into()),
            Err(Unchanged::UnknownQuestion("nope".to_string()))
        );
    }

    #[test]
    fn shape_mismatch_is_stored_as_incorrect() {
        let set = quiz();
        let state = QuizState::new(3);
        let state = submit_answer(&state, &set, "languages", "javascript".into()).unwrap();
        assert!(!state.answers().get("languages").unwrap().is_correct);
    }

    #[test]
    fn navigation_is_bounded() {
        let state = QuizState::new(3);
        assert_eq!(retreat_step(&state), Err(Unchanged::AtFirstStep));

        let state = advance_step(&state).unwrap();
        let state = advance_step(&state).unwrap();
        assert_eq!(state.current_step(), 3);
        assert_eq!(advance_step(&state), Err(Unchanged::AtLastStep));

        let state = retreat_step(&state).unwrap();
        assert_eq!(state.current_step(), 2);
    }

    #[test]
    fn jump_checks_range() {
        let state = QuizState::new(3);
        assert_eq!(
            jump_to_step(&state, 0),
            Err(Unchanged::StepOutOfRange { step: 0, total: 3 })
        );
        assert_eq!(
            jump_to_step(&state, 4),
            Err(Unchanged::StepOutOfRange { step: 4, total: 3 })
        );
        assert_eq!(jump_to_step(&state, 3).unwrap().current_step(), 3);
        assert_eq!(jump_to_step(&state, 1).unwrap(), state);
    }

    #[test]
    fn can_advance_requires_an_answer_for_required_questions() {
        let set = quiz();
        let state = QuizState::new(3);
        assert!(!can_advance(&state, &set));

        let answered = submit_answer(&state, &set, "capital", "barcelona".into()).unwrap();
        assert!(can_advance(&answered, &set), "wrong answers still allow advancing");

        let blank = submit_answer(&state, &set, "capital", "".into()).unwrap();
        assert!(!can_advance(&blank, &set));
    }

    #[test]
    fn can_advance_on_multiple_needs_a_selection() {
        let set = quiz();
        let state = jump_to_step(&QuizState::new(3), 2).unwrap();

        let empty = submit_answer(&state, &set, "languages", Vec::<String>::new().into()).unwrap();
        assert!(!can_advance(&empty, &set));

        let scalar = submit_answer(&state, &set, "languages", "html".into()).unwrap();
        assert!(!can_advance(&scalar, &set));

        let picked = submit_answer(&state, &set, "languages", vec!["html"].into()).unwrap();
        assert!(can_advance(&picked, &set));
    }

    #[test]
    fn can_advance_past_optional_questions() {
        let set = quiz();
        let state = jump_to_step(&QuizState::new(3), 3).unwrap();
        assert!(can_advance(&state, &set));
    }

    #[test]
    fn can_advance_without_a_question_is_false() {
        let set = quiz();
        let state = QuizState::new(7);
        let state = jump_to_step(&state, 5).unwrap();
        assert!(!can_advance(&state, &set));
    }

    #[test]
    fn complete_counts_correct_answers() {
        let set = quiz();
        let state = QuizState::new(3);
        let state = submit_answer(&state, &set, "capital", "madrid".into()).unwrap();
        let state = submit_answer(&state, &set, "languages", vec!["html"].into()).unwrap();

        let done = complete_quiz(&state);
        assert!(done.is_completed());
        assert_eq!(done.score(), 1);
        assert_eq!(done.current_step(), state.current_step());
    }

    #[test]
    fn reset_restores_initial_state() {
        let set = quiz();
        let state = QuizState::new(3);
        let state = submit_answer(&state, &set, "capital", "madrid".into()).unwrap();
        let state = complete_quiz(&advance_step(&state).unwrap());

        assert_eq!(reset_quiz(&state), QuizState::new(3));
    }
}
