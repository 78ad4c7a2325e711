use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A single multiple-choice question as produced by the model.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct QuizQuestion {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: u32,
    #[validate(custom(function = "validate_not_blank"))]
    pub question: String,
    #[validate(nested)]
    pub choices: Choices,
    pub answer: AnswerKey,
    pub explanation: String,
}

/// The four labelled options, serialized under the keys `A` to `D`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Choices {
    #[serde(rename = "A")]
    #[validate(custom(function = "validate_not_blank"))]
    pub a: String,
    #[serde(rename = "B")]
    #[validate(custom(function = "validate_not_blank"))]
    pub b: String,
    #[serde(rename = "C")]
    #[validate(custom(function = "validate_not_blank"))]
    pub c: String,
    #[serde(rename = "D")]
    #[validate(custom(function = "validate_not_blank"))]
    pub d: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum AnswerKey {
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
    #[serde(alias = "d")]
    D,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            AnswerKey::A => "A",
            AnswerKey::B => "B",
            AnswerKey::C => "C",
            AnswerKey::D => "D",
        };
        f.write_str(letter)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
