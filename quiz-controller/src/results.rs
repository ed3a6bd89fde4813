use std::fmt;

use crate::{AnswerValue, QuestionSource, QuizState};

/// Summary of a quiz for the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResults {
    pub score: usize,
    pub total_questions: usize,
    pub is_completed: bool,
    reviews: Vec<QuestionReview>,
}

impl QuizResults {
    /// Build the summary of `state`, with one review per question in step order.
    pub fn from_state<S: QuestionSource + ?Sized>(source: &S, state: &QuizState) -> Self {
        let reviews = source
            .questions()
            .into_iter()
            .map(|question| {
                let answer = state.answers().get(question.id());
                QuestionReview {
                    step: question.step(),
                    question_id: question.id().to_string(),
                    title: question.title().to_string(),
                    answer: answer.map(|a| a.value.clone()),
                    is_correct: answer.is_some_and(|a| a.is_correct),
                    correct_answer: question.correct_answer(),
                    explanation: question.explanation().map(str::to_string),
                }
            })
            .collect();

        Self {
            score: state.score(),
            total_questions: state.total_questions(),
            is_completed: state.is_completed(),
            reviews,
        }
    }

    /// Score as a rounded percentage of the total; 0 for an empty quiz.
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (self.score as f64 / self.total_questions as f64 * 100.0).round() as u32
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_percentage(self.percentage())
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }

    /// Number of reviews marked correct.
    ///
    /// Matches `score` unless answers were changed after completion; the score
    /// is taken once by `complete_quiz`, reviews read the current answers.
    pub fn reviewed_correct(&self) -> usize {
        self.reviews.iter().filter(|review| review.is_correct).count()
    }

    /// Whether the reviews no longer add up to the completion score.
    pub fn score_is_outdated(&self) -> bool {
        self.is_completed && self.reviewed_correct() != self.score
    }

    /// Per-question breakdown, in step order.
    pub fn reviews(&self) -> &[QuestionReview] {
        &self.reviews
    }
}

/// How one question went.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionReview {
    pub step: usize,
    pub question_id: String,
    pub title: String,

    /// What was submitted, if anything.
    pub answer: Option<AnswerValue>,

    /// The stored correctness flag; `false` when unanswered.
    pub is_correct: bool,

    pub correct_answer: AnswerValue,
    pub explanation: Option<String>,
}

impl QuestionReview {
    /// The submitted answer for display, or "No answer".
    pub fn answer_display(&self) -> String {
        match &self.answer {
            Some(value) => value.to_string(),
            None => "No answer".to_string(),
        }
    }
}

/// Overall message for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    VeryGood,
    GoodAttempt,
    KeepPracticing,
}

impl Verdict {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            80..=89 => Self::VeryGood,
            60..=79 => Self::GoodAttempt,
            _ => Self::KeepPracticing,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Excellent => "Excellent work!",
            Self::VeryGood => "Very well done!",
            Self::GoodAttempt => "Good attempt",
            Self::KeepPracticing => "Keep practicing",
        })
    }
}

/// Coarse band of a result, e.g. for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    High,
    Medium,
    Low,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::High,
            60..=79 => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(score: usize, total_questions: usize) -> QuizResults {
        QuizResults {
            score,
            total_questions,
            is_completed: true,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn percentage_rounds() {
        assert_eq!(results(3, 5).percentage(), 60);
        assert_eq!(results(1, 3).percentage(), 33);
        assert_eq!(results(2, 3).percentage(), 67);
        assert_eq!(results(1, 8).percentage(), 13);
        assert_eq!(results(0, 0).percentage(), 0);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_percentage(100), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(90), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(89), Verdict::VeryGood);
        assert_eq!(Verdict::from_percentage(80), Verdict::VeryGood);
        assert_eq!(Verdict::from_percentage(79), Verdict::GoodAttempt);
        assert_eq!(Verdict::from_percentage(60), Verdict::GoodAttempt);
        assert_eq!(Verdict::from_percentage(59), Verdict::KeepPracticing);
        assert_eq!(Verdict::KeepPracticing.to_string(), "Keep practicing");
    }

    fn review(step: usize, is_correct: bool) -> QuestionReview {
        QuestionReview {
            step,
            question_id: step.to_string(),
            title: format!("Question {step}"),
            answer: Some(AnswerValue::from("x")),
            is_correct,
            correct_answer: AnswerValue::from("x"),
            explanation: None,
        }
    }

    #[test]
    fn outdated_score_is_detected() {
        let mut summary = results(1, 2);
        summary.reviews = vec![review(1, true), review(2, false)];
        assert_eq!(summary.reviewed_correct(), 1);
        assert!(!summary.score_is_outdated());

        summary.reviews[1].is_correct = true;
        assert_eq!(summary.reviewed_correct(), 2);
        assert!(summary.score_is_outdated());

        summary.is_completed = false;
        assert!(!summary.score_is_outdated());
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(results(4, 5).grade(), Grade::High);
        assert_eq!(results(3, 5).grade(), Grade::Medium);
        assert_eq!(results(2, 5).grade(), Grade::Low);
    }
}
