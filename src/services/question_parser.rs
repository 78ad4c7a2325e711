use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use validator::Validate;

use crate::{errors::ResponseParseError, models::domain::QuizQuestion};

/// Greedy, multi-line match from the first `[` to the last `]`.
static JSON_ARRAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("JSON_ARRAY_PATTERN is a valid regex pattern"));

/// Coerces raw model output into validated questions.
///
/// The text is parsed as JSON directly first. If that fails, the first
/// bracket-delimited span is extracted and parsed instead. Only after both
/// fail is the response rejected. A successfully parsed value must then match
/// the question shape and pass field validation.
pub fn parse_question_array(raw: &str) -> Result<Vec<QuizQuestion>, ResponseParseError> {
    let value = parse_json_value(raw).ok_or_else(|| ResponseParseError::Malformed {
        raw_response: raw.to_string(),
    })?;

    let questions: Vec<QuizQuestion> =
        serde_json::from_value(value).map_err(|e| ResponseParseError::Schema {
            message: e.to_string(),
            raw_response: raw.to_string(),
        })?;

    for question in &questions {
        question
            .validate()
            .map_err(|e| ResponseParseError::InvalidQuestion {
                id: question.id,
                message: e.to_string(),
                raw_response: raw.to_string(),
            })?;
    }

    Ok(questions)
}

fn parse_json_value(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Some(value),
        Err(direct_err) => {
            log::warn!(
                "Model response is not bare JSON ({}), falling back to array extraction",
                direct_err
            );
            let candidate = JSON_ARRAY_PATTERN.find(raw)?;
            serde_json::from_str::<Value>(candidate.as_str())
                .map_err(|e| log::warn!("Extracted array is not valid JSON: {}", e))
                .ok()
        }
    }
}
