use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A question after normalization. Order of questions and of options is
/// exactly the input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalQuestion {
    pub text: String,
    pub options: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("No questions found in input data")]
    NoQuestions,
    #[error("question {question} is missing 'text'")]
    MissingText { question: usize },
    #[error("question {question} has a non-array 'options'")]
    InvalidOptions { question: usize },
    #[error("question {question}, option {option} is missing 'text'")]
    MissingOptionText { question: usize, option: usize },
}

/// Resolves the loosely-shaped input (a bare array of questions, or an
/// object wrapping one under `questions`) into canonical questions.
///
/// Pure function of the input: no trimming, no deduplication, no
/// reordering. `options` is optional per question and defaults to an empty
/// list; every present option must carry a string `text`.
pub fn normalize(raw: &Value) -> Result<Vec<CanonicalQuestion>, NormalizeError> {
    let questions: &[Value] = match raw {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("questions") {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    };

    if questions.is_empty() {
        return Err(NormalizeError::NoQuestions);
    }

    let mut normalized = Vec::with_capacity(questions.len());
    for (idx, question) in questions.iter().enumerate() {
        let number = idx + 1;
        let text = question
            .get("text")
            .and_then(Value::as_str)
            .ok_or(NormalizeError::MissingText { question: number })?;

        let mut options = Vec::new();
        if let Some(raw_options) = question.get("options") {
            let items = raw_options
                .as_array()
                .ok_or(NormalizeError::InvalidOptions { question: number })?;
            for (opt_idx, option) in items.iter().enumerate() {
                let option_text = option.get("text").and_then(Value::as_str).ok_or(
                    NormalizeError::MissingOptionText {
                        question: number,
                        option: opt_idx + 1,
                    },
                )?;
                options.push(option_text.to_string());
            }
        }

        normalized.push(CanonicalQuestion {
            text: text.to_string(),
            options,
        });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_bare_array() {
        let raw = json!([
            {"text": "Q1", "options": [{"text": "A"}, {"text": "B"}]},
            {"text": "Q2", "options": [{"text": "C"}]},
        ]);
        let questions = normalize(&raw).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "Q1");
        assert_eq!(questions[0].options, vec!["A", "B"]);
        assert_eq!(questions[1].text, "Q2");
        assert_eq!(questions[1].options, vec!["C"]);
    }

    #[test]
    fn accepts_wrapped_object() {
        let raw = json!({"questions": [{"text": "Q1", "options": []}]});
        let questions = normalize(&raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Q1");
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn preserves_order_without_reshaping() {
        let raw = json!([
            {"text": "  spaced  ", "options": [{"text": "b"}, {"text": "a"}, {"text": "a"}]},
        ]);
        let questions = normalize(&raw).unwrap();
        assert_eq!(questions[0].text, "  spaced  ");
        assert_eq!(questions[0].options, vec!["b", "a", "a"]);
    }

    #[test]
    fn missing_options_defaults_to_empty() {
        let raw = json!([{"text": "Q1"}]);
        let questions = normalize(&raw).unwrap();
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn empty_shapes_fail_with_no_questions() {
        for raw in [json!([]), json!({}), json!({"questions": []})] {
            assert_eq!(normalize(&raw), Err(NormalizeError::NoQuestions));
        }
    }

    #[test]
    fn unexpected_shapes_fail_with_no_questions() {
        for raw in [json!("questions"), json!(42), json!(null), json!({"questions": "Q1"})] {
            assert_eq!(normalize(&raw), Err(NormalizeError::NoQuestions));
        }
    }

    #[test]
    fn missing_question_text_is_reported_with_position() {
        let raw = json!([{"text": "Q1"}, {"options": []}]);
        assert_eq!(
            normalize(&raw),
            Err(NormalizeError::MissingText { question: 2 })
        );
    }

    #[test]
    fn non_string_question_text_is_rejected() {
        let raw = json!([{"text": 5}]);
        assert_eq!(
            normalize(&raw),
            Err(NormalizeError::MissingText { question: 1 })
        );
    }

    #[test]
    fn missing_option_text_is_reported_with_position() {
        let raw = json!([{"text": "Q1", "options": [{"text": "A"}, {"label": "B"}]}]);
        assert_eq!(
            normalize(&raw),
            Err(NormalizeError::MissingOptionText {
                question: 1,
                option: 2
            })
        );
    }

    #[test]
    fn non_array_options_are_rejected() {
        let raw = json!([{"text": "Q1", "options": "A"}]);
        assert_eq!(
            normalize(&raw),
            Err(NormalizeError::InvalidOptions { question: 1 })
        );
    }
}
