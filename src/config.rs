use std::{env, path::PathBuf, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Tunable bounds for quiz requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizLimits {
    pub min_questions: u32,
    pub max_questions: u32,
    pub default_questions: u32,
    pub summary_bullet_count: u32,
    pub max_upload_bytes: usize,
}

impl Default for QuizLimits {
    fn default() -> Self {
        Self {
            min_questions: 1,
            max_questions: 20,
            default_questions: 5,
            summary_bullet_count: 6,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl QuizLimits {
    /// Upload limit rendered for messages, e.g. "10MB". Limits that are not a
    /// whole number of megabytes fall back to KB, then to bytes.
    pub fn max_upload_label(&self) -> String {
        const KB: usize = 1024;
        const MB: usize = 1024 * KB;

        match self.max_upload_bytes {
            bytes if bytes >= MB && bytes % MB == 0 => format!("{}MB", bytes / MB),
            bytes if bytes >= KB && bytes % KB == 0 => format!("{}KB", bytes / KB),
            bytes => format!("{} bytes", bytes),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_timeout_seconds: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub upload_dir: PathBuf,
    pub quiz_limits: QuizLimits,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// `LLM_API_KEY` and `LLM_MODEL` are required; everything else has a default.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    AppError::ConfigError(format!("{} is required in environment variables", key))
                })
        };

        let defaults = QuizLimits::default();
        let quiz_limits = QuizLimits {
            min_questions: parse_or(&lookup, "QUIZ_MIN_QUESTIONS", defaults.min_questions)?,
            max_questions: parse_or(&lookup, "QUIZ_MAX_QUESTIONS", defaults.max_questions)?,
            default_questions: parse_or(
                &lookup,
                "QUIZ_DEFAULT_QUESTIONS",
                defaults.default_questions,
            )?,
            summary_bullet_count: parse_or(
                &lookup,
                "SUMMARY_BULLET_COUNT",
                defaults.summary_bullet_count,
            )?,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        };

        let config = Self {
            llm_api_key: SecretString::from(required("LLM_API_KEY")?),
            llm_model: required("LLM_MODEL")?,
            llm_api_base: lookup("LLM_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            llm_timeout_seconds: parse_or(&lookup, "LLM_TIMEOUT_SECONDS", 60)?,
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "localhost".to_string()),
            web_server_port: parse_or(&lookup, "WEB_SERVER_PORT", 3002)?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_else(default_origins),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
            quiz_limits,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        let limits = &self.quiz_limits;

        if limits.min_questions == 0 {
            return Err(AppError::ConfigError(
                "QUIZ_MIN_QUESTIONS must be at least 1".to_string(),
            ));
        }
        if limits.min_questions > limits.max_questions {
            return Err(AppError::ConfigError(format!(
                "QUIZ_MIN_QUESTIONS ({}) exceeds QUIZ_MAX_QUESTIONS ({})",
                limits.min_questions, limits.max_questions
            )));
        }
        if !(limits.min_questions..=limits.max_questions).contains(&limits.default_questions) {
            return Err(AppError::ConfigError(format!(
                "QUIZ_DEFAULT_QUESTIONS ({}) must be between {} and {}",
                limits.default_questions, limits.min_questions, limits.max_questions
            )));
        }
        if limits.summary_bullet_count == 0 {
            return Err(AppError::ConfigError(
                "SUMMARY_BULLET_COUNT must be at least 1".to_string(),
            ));
        }
        if self.llm_timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "LLM_TIMEOUT_SECONDS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_seconds)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test-api-key".to_string()),
            llm_api_base: DEFAULT_API_BASE.to_string(),
            llm_model: "test-model".to_string(),
            llm_timeout_seconds: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3002,
            cors_allowed_origins: default_origins(),
            upload_dir: env::temp_dir(),
            quiz_limits: QuizLimits::default(),
        }
    }
}

fn default_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:3001",
        "http://127.0.0.1:3001",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}
