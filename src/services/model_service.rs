use std::{sync::Arc, time::Duration};

use crate::{
    constants::prompts::{
        markdown_prompt, question_prompt, summary_prompt, MARKDOWN_SYSTEM_PROMPT,
        QUESTION_GENERATOR_SYSTEM_PROMPT, SUMMARIZER_SYSTEM_PROMPT,
    },
    errors::{AppError, AppResult},
    models::domain::{QuizQuestion, Summary},
    services::{
        oracle::{ChatMessage, CompletionOracle},
        question_parser::parse_question_array,
    },
};

/// Prompt construction and response handling around one shared oracle.
pub struct ModelService {
    oracle: Arc<dyn CompletionOracle>,
    timeout: Duration,
    summary_bullet_count: u32,
}

impl ModelService {
    pub fn new(
        oracle: Arc<dyn CompletionOracle>,
        timeout: Duration,
        summary_bullet_count: u32,
    ) -> Self {
        Self {
            oracle,
            timeout,
            summary_bullet_count,
        }
    }

    /// Compresses text into a bullet summary. The response is returned verbatim.
    pub async fn summarize(&self, text: &str) -> AppResult<Summary> {
        log::info!("Summarizing {} characters of text", text.len());

        let messages = [
            ChatMessage::system(SUMMARIZER_SYSTEM_PROMPT),
            ChatMessage::human(summary_prompt(text, self.summary_bullet_count)),
        ];
        let content = self.invoke(&messages).await?;
        Ok(Summary::new(content))
    }

    /// Asks for `count` questions and coerces the reply into validated questions.
    /// The count is not enforced on the reply.
    pub async fn generate_questions(&self, text: &str, count: u32) -> AppResult<Vec<QuizQuestion>> {
        log::info!("Generating {} questions", count);

        let messages = [
            ChatMessage::system(QUESTION_GENERATOR_SYSTEM_PROMPT),
            ChatMessage::human(question_prompt(text, count)),
        ];
        let content = self.invoke(&messages).await?;

        let questions = parse_question_array(&content).map_err(|e| {
            log::error!("Failed to parse questions from model response: {}", e);
            e
        })?;

        if questions.len() != count as usize {
            log::warn!(
                "Requested {} questions but the model returned {}",
                count,
                questions.len()
            );
        }
        Ok(questions)
    }

    pub async fn convert_to_markdown(&self, text: &str) -> AppResult<String> {
        log::info!("Converting {} characters of text to markdown", text.len());

        let messages = [
            ChatMessage::system(MARKDOWN_SYSTEM_PROMPT),
            ChatMessage::human(markdown_prompt(text)),
        ];
        self.invoke(&messages).await
    }

    async fn invoke(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let content = tokio::time::timeout(self.timeout, self.oracle.invoke(messages))
            .await
            .map_err(|_| {
                log::error!("Model call exceeded {:?}", self.timeout);
                AppError::OracleTimeout(format!("Model did not respond within {:?}", self.timeout))
            })??;
        Ok(content)
    }
}
