use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret as _;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{config::Config, errors::OracleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    Human,
}

impl MessageRole {
    fn as_wire_role(self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::Human => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Human,
            content: content.into(),
        }
    }
}

/// Text-completion provider. Implementations return the raw completion text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, OracleError>;
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiOracle {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiOracle {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.expose_secret())
            .with_api_base(config.llm_api_base.clone());

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
        }
    }

    fn request_body(&self, messages: &[ChatMessage]) -> Value {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_wire_role(), "content": m.content }))
            .collect();

        json!({
            "model": self.model,
            "temperature": 0,
            "messages": messages,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Value,
}

#[async_trait]
impl CompletionOracle for OpenAiOracle {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, OracleError> {
        let response: CompletionResponse = self
            .client
            .chat()
            .create_byot(self.request_body(messages))
            .await
            .map_err(|e| {
                log::error!("Completion request to model {} failed: {}", self.model, e);
                OracleError::Request(e.to_string())
            })?;

        let content = response
            .choices
            .first()
            .map(|choice| content_to_string(&choice.message.content))
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(content)
    }
}

/// Flattens message content that may arrive as a string or as an array of parts.
pub fn content_to_string(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| {
                part.get("text")
                    .or_else(|| part.get("input_text"))
                    .and_then(Value::as_str)
            })
            .collect(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_to_string_handles_plain_text() {
        assert_eq!(content_to_string(&json!("hello")), "hello");
    }

    #[test]
    fn content_to_string_joins_text_parts() {
        let content = json!([
            { "type": "text", "text": "[{\"id\":1" },
            { "type": "image_url", "image_url": { "url": "http://x" } },
            { "type": "text", "input_text": "}]" }
        ]);
        assert_eq!(content_to_string(&content), "[{\"id\":1}]");
    }

    #[test]
    fn content_to_string_treats_null_as_empty() {
        assert_eq!(content_to_string(&Value::Null), "");
    }

    #[test]
    fn request_body_maps_roles_and_pins_temperature() {
        let oracle = OpenAiOracle::new(&Config::test_config());
        let body = oracle.request_body(&[
            ChatMessage::system("You produce strictly JSON."),
            ChatMessage::human("Give me questions"),
        ]);

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["temperature"], 0);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Give me questions");
    }

    #[test]
    fn completion_response_decodes_missing_content() {
        let response: CompletionResponse =
            serde_json::from_value(json!({ "choices": [{ "message": { "role": "assistant" } }] }))
                .unwrap();
        assert_eq!(content_to_string(&response.choices[0].message.content), "");
    }
}
