use std::collections::{HashMap, HashSet};

use crate::{Question, QuestionSetError, QuestionSource};

/// The fixed, ordered list of questions a quiz runs through.
///
/// Construction checks that question ids are unique and that steps run from 1
/// to N without gaps, so that every step in range has exactly one question.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    /// Optional heading shown before the first question.
    pub title: Option<String>,

    /// Optional message shown before the first question.
    pub intro: Option<String>,

    /// Questions sorted by step; `questions[i].step() == i + 1`.
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a question set, validating ids and steps.
    ///
    /// The questions may be given in any order; they are kept sorted by step.
    ///
    /// ```
    /// use quiz_types::{Question, QuestionSet, QuestionSetError};
    ///
    /// let set = QuestionSet::new(vec![
    ///     Question::text("b", 2, "Second?", "2"),
    ///     Question::text("a", 1, "First?", "1"),
    /// ])
    /// .unwrap();
    /// assert_eq!(set.questions()[0].id(), "a");
    ///
    /// let gap = QuestionSet::new(vec![Question::text("a", 2, "Only?", "x")]);
    /// assert_eq!(gap.unwrap_err(), QuestionSetError::MissingStep { missing: 1, total: 1 });
    /// ```
    pub fn new(mut questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        validate(&questions)?;
        questions.sort_by_key(Question::step);

        Ok(Self {
            title: None,
            intro: None,
            questions,
        })
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the intro message.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Get the questions in step order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a successfully built set; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate(questions: &[Question]) -> Result<(), QuestionSetError> {
    if questions.is_empty() {
        return Err(QuestionSetError::Empty);
    }

    let mut ids = HashSet::new();
    for question in questions {
        if !ids.insert(question.id()) {
            return Err(QuestionSetError::DuplicateId(question.id().to_string()));
        }
    }

    let mut steps: HashMap<usize, &str> = HashMap::new();
    for question in questions {
        if let Some(first) = steps.insert(question.step(), question.id()) {
            return Err(QuestionSetError::DuplicateStep {
                step: question.step(),
                first: first.to_string(),
                second: question.id().to_string(),
            });
        }
    }

    let total = questions.len();
    match (1..=total).find(|step| !steps.contains_key(step)) {
        Some(missing) => Err(QuestionSetError::MissingStep { missing, total }),
        None => Ok(()),
    }
}

impl QuestionSource for QuestionSet {
    fn question_by_step(&self, step: usize) -> Option<&Question> {
        step.checked_sub(1).and_then(|idx| self.questions.get(idx))
    }

    fn total_steps(&self) -> usize {
        self.questions.len()
    }

    fn question_by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: &str, step: usize) -> Question {
        Question::text(id, step, format!("Question {id}"), "answer")
    }

    #[test]
    fn lookup_by_step_and_id() {
        let set = QuestionSet::new(vec![q("c", 3), q("a", 1), q("b", 2)]).unwrap();

        assert_eq!(set.total_steps(), 3);
        assert_eq!(set.question_by_step(2).map(Question::id), Some("b"));
        assert_eq!(set.question_by_id("c").map(Question::step), Some(3));
        assert!(set.question_by_step(0).is_none());
        assert!(set.question_by_step(4).is_none());
        assert!(set.question_by_id("z").is_none());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(QuestionSet::new(Vec::new()).unwrap_err(), QuestionSetError::Empty);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = QuestionSet::new(vec![q("a", 1), q("a", 2)]).unwrap_err();
        assert_eq!(err, QuestionSetError::DuplicateId("a".to_string()));
    }

    #[test]
    fn rejects_duplicate_steps() {
        let err = QuestionSet::new(vec![q("a", 1), q("b", 1)]).unwrap_err();
        assert_eq!(
            err,
            QuestionSetError::DuplicateStep {
                step: 1,
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }

    #[test]
    fn rejects_gaps() {
        let err = QuestionSet::new(vec![q("a", 1), q("b", 3)]).unwrap_err();
        assert_eq!(err, QuestionSetError::MissingStep { missing: 2, total: 2 });

        let err = QuestionSet::new(vec![q("a", 0)]).unwrap_err();
        assert_eq!(err, QuestionSetError::MissingStep { missing: 1, total: 1 });
    }

    #[test]
    fn title_and_intro() {
        let set = QuestionSet::new(vec![q("a", 1)])
            .unwrap()
            .with_title("Trivia")
            .with_intro("Five quick questions.");
        assert_eq!(set.title.as_deref(), Some("Trivia"));
        assert_eq!(set.intro.as_deref(), Some("Five quick questions."));
        assert_eq!(set.len(), 1);
    }
}
