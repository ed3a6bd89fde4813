use crate::AnswerValue;

/// Compare a submitted answer against a correct answer.
///
/// - Two lists are equal when they have the same length and match position by
///   position once both are sorted. Order does not matter, duplicates do.
/// - Two strings are equal when their trimmed, lowercased forms match.
/// - A list never equals a string.
///
/// ```
/// use quiz_types::{AnswerValue, compare_answers};
///
/// assert!(compare_answers(&" Madrid ".into(), &"madrid".into()));
/// assert!(compare_answers(
///     &AnswerValue::from(vec!["python", "javascript"]),
///     &AnswerValue::from(vec!["javascript", "python"]),
/// ));
/// assert!(!compare_answers(&"madrid".into(), &AnswerValue::from(vec!["madrid"])));
/// ```
pub fn compare_answers(submitted: &AnswerValue, correct: &AnswerValue) -> bool {
    match (submitted, correct) {
        (AnswerValue::StringList(submitted), AnswerValue::StringList(correct)) => {
            if submitted.len() != correct.len() {
                return false;
            }
            let mut submitted: Vec<&str> = submitted.iter().map(String::as_str).collect();
            let mut correct: Vec<&str> = correct.iter().map(String::as_str).collect();
            submitted.sort_unstable();
            correct.sort_unstable();
            submitted == correct
        }
        (AnswerValue::String(submitted), AnswerValue::String(correct)) => {
            normalize(submitted) == normalize(correct)
        }
        _ => false,
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> AnswerValue {
        AnswerValue::from(items)
    }

    #[test]
    fn strings_ignore_case_and_surrounding_whitespace() {
        assert!(compare_answers(&"Madrid".into(), &"madrid".into()));
        assert!(compare_answers(&" madrid ".into(), &"madrid".into()));
        assert!(compare_answers(&"\t1998\n".into(), &"1998".into()));
        assert!(compare_answers(&"madrid".into(), &"  MADRID".into()));
    }

    #[test]
    fn strings_keep_inner_whitespace() {
        assert!(!compare_answers(&"new york".into(), &"newyork".into()));
        assert!(!compare_answers(&"barcelona".into(), &"madrid".into()));
    }

    #[test]
    fn a_value_equals_itself() {
        for value in [
            AnswerValue::from("jupiter"),
            AnswerValue::from(""),
            list(&["2", "7", "11"]),
            list(&[]),
        ] {
            assert!(compare_answers(&value, &value), "{value:?}");
        }
    }

    #[test]
    fn lists_are_order_independent() {
        assert!(compare_answers(&list(&["a", "b"]), &list(&["b", "a"])));
        assert!(compare_answers(
            &list(&["11", "2", "7"]),
            &list(&["2", "7", "11"])
        ));
    }

    #[test]
    fn lists_need_equal_length() {
        assert!(!compare_answers(&list(&["a"]), &list(&["a", "b"])));
        assert!(!compare_answers(&list(&["a", "b", "c"]), &list(&["a", "b"])));
    }

    #[test]
    fn list_duplicates_must_mirror_each_other() {
        assert!(!compare_answers(&list(&["a", "a"]), &list(&["a", "b"])));
        assert!(compare_answers(&list(&["a", "b", "a"]), &list(&["a", "a", "b"])));
    }

    #[test]
    fn list_items_compare_exactly() {
        assert!(!compare_answers(&list(&["Python"]), &list(&["python"])));
        assert!(!compare_answers(&list(&[" python"]), &list(&["python"])));
    }

    #[test]
    fn mismatched_shapes_are_never_equal() {
        assert!(!compare_answers(&"a".into(), &list(&["a"])));
        assert!(!compare_answers(&list(&["a"]), &"a".into()));
        assert!(!compare_answers(&"".into(), &list(&[])));
    }
}
