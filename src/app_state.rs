use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::ModelService,
        oracle::{CompletionOracle, OpenAiOracle},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the state around the configured OpenAI-compatible client.
    pub fn new(config: Config) -> Self {
        let oracle = Arc::new(OpenAiOracle::new(&config));
        log::info!(
            "Using model {} at {}",
            config.llm_model,
            config.llm_api_base
        );
        Self::with_oracle(config, oracle)
    }

    pub fn with_oracle(config: Config, oracle: Arc<dyn CompletionOracle>) -> Self {
        let model_service = Arc::new(ModelService::new(
            oracle,
            config.llm_timeout(),
            config.quiz_limits.summary_bullet_count,
        ));
        let quiz_service = Arc::new(QuizService::new(model_service));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
