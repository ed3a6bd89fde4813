use std::collections::HashMap;

use crate::AnswerValue;

/// The answer recorded for one question.
///
/// `is_correct` is computed once, when the answer is submitted, and only
/// changes when the answer is submitted again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    pub is_correct: bool,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue, is_correct: bool) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            is_correct,
        }
    }
}

/// Answers collected so far, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<String, Answer>,
}

impl Answers {
    /// Create a new empty answers collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer, replacing any earlier answer to the same question.
    pub fn insert(&mut self, answer: Answer) -> Option<Answer> {
        self.values.insert(answer.question_id.clone(), answer)
    }

    /// Get the answer to the question with the given id.
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.values.get(question_id)
    }

    /// Check if the question with the given id has been answered.
    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    /// Get an iterator over all answers, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.values.values()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count the answers whose correctness flag is set.
    pub fn correct_count(&self) -> usize {
        self.values.values().filter(|answer| answer.is_correct).count()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a Answer;
    type IntoIter = std::collections::hash_map::Values<'a, String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.values()
    }
}
