use crate::AnswerValue;

/// A single question in a quiz.
///
/// Questions are immutable once built. The kind-specific data (options and the
/// correct answer) lives in [`QuestionKind`], so a multiple-choice question can
/// only ever carry a list as its correct answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Identifier used as the key for this question's answer.
    id: String,

    /// 1-based position in the quiz.
    step: usize,

    /// The question text shown to the user.
    title: String,

    /// Optional hint shown below the title.
    description: Option<String>,

    /// The kind of question (determines input type and correct answer shape).
    kind: QuestionKind,

    /// Whether an answer is needed before moving past this question.
    required: bool,

    /// Placeholder text for free-text input.
    placeholder: Option<String>,

    /// Why the correct answer is correct, shown as feedback.
    explanation: Option<String>,
}

impl Question {
    /// Create a new question. Prefer [`Question::single`], [`Question::multiple`]
    /// or [`Question::text`].
    pub fn new(
        id: impl Into<String>,
        step: usize,
        title: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id: id.into(),
            step,
            title: title.into(),
            description: None,
            kind,
            required: true,
            placeholder: None,
            explanation: None,
        }
    }

    /// A single-choice question whose correct answer is one option value.
    pub fn single(
        id: impl Into<String>,
        step: usize,
        title: impl Into<String>,
        options: Vec<QuestionOption>,
        correct: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            step,
            title,
            QuestionKind::Single(SingleChoiceQuestion::new(options, correct)),
        )
    }

    /// A multiple-choice question whose correct answer is a set of option values.
    pub fn multiple<I, T>(
        id: impl Into<String>,
        step: usize,
        title: impl Into<String>,
        options: Vec<QuestionOption>,
        correct: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(
            id,
            step,
            title,
            QuestionKind::Multiple(MultipleChoiceQuestion::new(options, correct)),
        )
    }

    /// A free-text question compared case- and whitespace-insensitively.
    pub fn text(
        id: impl Into<String>,
        step: usize,
        title: impl Into<String>,
        correct: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            step,
            title,
            QuestionKind::Text(TextQuestion::new(correct)),
        )
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the explanation shown as feedback.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Set the input placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mark this question as optional (questions are required by default).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// The options to choose from (empty for text questions).
    pub fn options(&self) -> &[QuestionOption] {
        self.kind.options()
    }

    /// Find the option with the given value.
    pub fn option_by_value(&self, value: &str) -> Option<&QuestionOption> {
        self.options().iter().find(|option| option.value == value)
    }

    /// The correct answer in the shape a submission is compared against.
    pub fn correct_answer(&self) -> AnswerValue {
        match &self.kind {
            QuestionKind::Single(q) => AnswerValue::String(q.correct.clone()),
            QuestionKind::Multiple(q) => AnswerValue::StringList(q.correct.clone()),
            QuestionKind::Text(q) => AnswerValue::String(q.correct.clone()),
        }
    }

    /// Whether `value` is one of the correct option values.
    ///
    /// Used to highlight options; this is an exact match, unlike answer comparison.
    pub fn is_correct_option(&self, value: &str) -> bool {
        match &self.kind {
            QuestionKind::Single(q) => q.correct == value,
            QuestionKind::Multiple(q) => q.correct.iter().any(|c| c == value),
            QuestionKind::Text(q) => q.correct == value,
        }
    }
}

/// The kind of question, determining input type and the correct answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Pick exactly one option.
    Single(SingleChoiceQuestion),

    /// Pick any number of options.
    Multiple(MultipleChoiceQuestion),

    /// Type a free-text answer.
    Text(TextQuestion),
}

impl QuestionKind {
    /// The options to choose from (empty for text questions).
    pub fn options(&self) -> &[QuestionOption] {
        match self {
            Self::Single(q) => &q.options,
            Self::Multiple(q) => &q.options,
            Self::Text(_) => &[],
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Get the kind name: `single`, `multiple` or `text`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Single(_) => "single",
            Self::Multiple(_) => "multiple",
            Self::Text(_) => "text",
        }
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: String,

    /// Text shown to the user.
    pub label: String,

    /// Value stored in the answer when this option is picked.
    pub value: String,
}

impl QuestionOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an option whose id and value are the same.
    pub fn keyed(value: impl Into<String>, label: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: value.clone(),
            label: label.into(),
            value,
        }
    }
}

/// Configuration for a single-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceQuestion {
    pub options: Vec<QuestionOption>,

    /// The value of the correct option.
    pub correct: String,
}

impl SingleChoiceQuestion {
    pub fn new(options: Vec<QuestionOption>, correct: impl Into<String>) -> Self {
        Self {
            options,
            correct: correct.into(),
        }
    }
}

/// Configuration for a multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleChoiceQuestion {
    pub options: Vec<QuestionOption>,

    /// The values of all correct options.
    pub correct: Vec<String>,
}

impl MultipleChoiceQuestion {
    pub fn new<I, T>(options: Vec<QuestionOption>, correct: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            options,
            correct: correct.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, PartialEq)]
pub struct TextQuestion {
    /// The expected text.
    pub correct: String,
}

impl TextQuestion {
    pub fn new(correct: impl Into<String>) -> Self {
        Self {
            correct: correct.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planets() -> Vec<QuestionOption> {
        vec![
            QuestionOption::keyed("earth", "Earth"),
            QuestionOption::keyed("jupiter", "Jupiter"),
        ]
    }

    #[test]
    fn defaults() {
        let q = Question::single("4", 4, "Largest planet?", planets(), "jupiter");
        assert!(q.is_required());
        assert_eq!(q.description(), None);
        assert_eq!(q.explanation(), None);
        assert_eq!(q.placeholder(), None);
        assert_eq!(q.kind().type_name(), "single");
    }

    #[test]
    fn correct_answer_shape_follows_kind() {
        let single = Question::single("1", 1, "Capital?", planets(), "jupiter");
        assert_eq!(single.correct_answer(), AnswerValue::from("jupiter"));

        let multiple = Question::multiple("2", 2, "Primes?", Vec::new(), ["2", "7", "11"]);
        assert_eq!(
            multiple.correct_answer(),
            AnswerValue::from(vec!["2", "7", "11"])
        );
        assert!(multiple.kind().is_multiple());

        let text = Question::text("3", 3, "Year?", "1998").with_placeholder("e.g. 1998");
        assert_eq!(text.correct_answer(), AnswerValue::from("1998"));
        assert_eq!(text.placeholder(), Some("e.g. 1998"));
        assert!(text.options().is_empty());
    }

    #[test]
    fn options_lookup() {
        let q = Question::multiple("2", 2, "Planets?", planets(), ["jupiter"]).optional();
        assert!(!q.is_required());
        assert_eq!(
            q.option_by_value("earth").map(|o| o.label.as_str()),
            Some("Earth")
        );
        assert!(q.option_by_value("pluto").is_none());
        assert!(q.is_correct_option("jupiter"));
        assert!(!q.is_correct_option("earth"));
    }
}
