use std::fmt;

/// A value submitted as the answer to a question.
///
/// Single-choice and text questions are answered with a `String`,
/// multiple-choice questions with a `StringList` of selected option values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// A single value (from Single or Text questions).
    String(String),

    /// The selected option values of a Multiple question, in selection order.
    StringList(Vec<String>),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::StringList(_) => None,
        }
    }

    /// Try to get this value as a list of strings.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(list) => Some(list),
            Self::String(_) => None,
        }
    }

    /// Whether this value counts as "no answer": an empty string or an empty selection.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::StringList(list) => list.is_empty(),
        }
    }

    /// Get the type name of this value, as reported in answer logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::StringList(_) => "StringList",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::StringList(list) => f.write_str(&list.join(", ")),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::StringList(list)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(list: Vec<&str>) -> Self {
        Self::StringList(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AnswerValue {
    fn from(list: &[&str]) -> Self {
        Self::StringList(list.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_lists() {
        let value = AnswerValue::from(vec!["javascript", "python"]);
        assert_eq!(value.to_string(), "javascript, python");
        assert_eq!(AnswerValue::from("1998").to_string(), "1998");
    }

    #[test]
    fn emptiness() {
        assert!(AnswerValue::from("").is_empty());
        assert!(AnswerValue::StringList(Vec::new()).is_empty());
        assert!(!AnswerValue::from(" ").is_empty());
        assert!(!AnswerValue::from(vec!["a"]).is_empty());
    }

    #[test]
    fn accessors_respect_the_variant() {
        let single = AnswerValue::from("madrid");
        assert_eq!(single.as_str(), Some("madrid"));
        assert_eq!(single.as_list(), None);

        let many = AnswerValue::from(vec!["2", "7"]);
        assert_eq!(many.as_str(), None);
        assert_eq!(many.as_list().map(<[String]>::len), Some(2));
        assert_eq!(many.type_name(), "StringList");
    }
}
