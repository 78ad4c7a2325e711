use std::{future::Future, path::Path, sync::Arc};

use crate::{
    errors::AppResult,
    models::domain::{QuizResult, SourceContent, Summary},
    services::{extractor, model_service::ModelService},
};

pub struct QuizService {
    model_service: Arc<ModelService>,
}

impl QuizService {
    pub fn new(model_service: Arc<ModelService>) -> Self {
        Self { model_service }
    }

    /// Extract, summarize, then synthesize. Topics are summarized too, but only
    /// document sources return the summary.
    pub async fn generate_quiz(&self, source: SourceContent, count: u32) -> AppResult<QuizResult> {
        let text = extractor::extract(&source).await?;
        let summary = self.model_service.summarize(text.as_str()).await?;
        let questions = self
            .model_service
            .generate_questions(summary.as_str(), count)
            .await?;

        Ok(QuizResult {
            summary: source.is_document().then_some(summary),
            questions,
        })
    }

    pub async fn generate_topic_quiz(&self, topic: &str, count: u32) -> AppResult<QuizResult> {
        self.generate_quiz(SourceContent::Topic(topic.to_string()), count)
            .await
    }

    /// Runs the pipeline on an uploaded PDF and removes the file afterwards.
    pub async fn generate_document_quiz(&self, path: &Path, count: u32) -> AppResult<QuizResult> {
        with_cleanup(
            path,
            self.generate_quiz(SourceContent::Document(path.to_path_buf()), count),
        )
        .await
    }

    pub async fn summarize_document(&self, path: &Path) -> AppResult<Summary> {
        with_cleanup(path, async {
            let text = extractor::extract_pdf_text(path).await?;
            self.model_service.summarize(&text).await
        })
        .await
    }

    pub async fn convert_document_to_markdown(&self, path: &Path) -> AppResult<String> {
        with_cleanup(path, async {
            let text = extractor::extract_pdf_text(path).await?;
            self.model_service.convert_to_markdown(&text).await
        })
        .await
    }
}

/// Awaits `work`, then removes `path` whatever the outcome. The file is also
/// removed if this future is dropped before `work` finishes.
async fn with_cleanup<T, F>(path: &Path, work: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let file = extractor::own_upload(path);
    let result = work.await;
    extractor::cleanup_file(file);
    result
}
