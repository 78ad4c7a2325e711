use serde::Serialize;

use crate::models::domain::{QuizQuestion, Summary};

/// Output of one pipeline run. `summary` is only set for document sources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    pub questions: Vec<QuizQuestion>,
}
