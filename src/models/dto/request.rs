use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    config::QuizLimits,
    errors::{AppError, AppResult},
};

/// `numQuestions` as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumQuestionsInput {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TopicQuizRequest {
    #[serde(default)]
    #[validate(custom(
        function = "validate_topic",
        message = "Topic is required and must be a non-empty string"
    ))]
    pub topic: String,

    #[serde(default)]
    pub num_questions: Option<NumQuestionsInput>,
}

impl TopicQuizRequest {
    /// Validates the body and returns the trimmed topic with the resolved question count.
    pub fn into_validated(self, limits: &QuizLimits) -> AppResult<(String, u32)> {
        if self.validate().is_err() {
            return Err(AppError::ValidationError(
                "Topic is required and must be a non-empty string".to_string(),
            ));
        }
        let count = resolve_num_questions(self.num_questions.as_ref(), limits)?;
        Ok((self.topic.trim().to_string(), count))
    }
}

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::new("blank_topic"));
    }
    Ok(())
}

/// Applies the default when absent and rejects anything outside the configured bounds.
pub fn resolve_num_questions(
    input: Option<&NumQuestionsInput>,
    limits: &QuizLimits,
) -> AppResult<u32> {
    let out_of_range = || {
        AppError::ValidationError(format!(
            "Number of questions must be between {} and {}",
            limits.min_questions, limits.max_questions
        ))
    };

    let value = match input {
        None => return Ok(limits.default_questions),
        Some(NumQuestionsInput::Number(n)) => n.as_i64().ok_or_else(out_of_range)?,
        Some(NumQuestionsInput::Text(s)) => s.trim().parse::<i64>().map_err(|_| out_of_range())?,
    };

    let min = i64::from(limits.min_questions);
    let max = i64::from(limits.max_questions);
    if !(min..=max).contains(&value) {
        return Err(out_of_range());
    }
    Ok(value as u32)
}
