use std::collections::BTreeMap;

use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::upload::{receive_pdf_upload, PdfUpload},
    middleware::get_request_id,
    models::dto::{
        request::{resolve_num_questions, NumQuestionsInput, TopicQuizRequest},
        response::{MarkdownData, QuizInfoResponse, QuizLimitsInfo, SummaryData, SERVICE_NAME},
    },
    services::http_helpers::success_json,
};

#[get("/api/v1/quiz")]
pub async fn get_quiz_info(state: web::Data<AppState>) -> HttpResponse {
    let endpoints = BTreeMap::from([
        ("POST /api/v1/quiz/topic", "Generate quiz from text topic"),
        ("POST /api/v1/quiz/pdf", "Generate quiz from PDF upload"),
        ("POST /api/v1/quiz/summarize", "Summarize PDF content only"),
        (
            "POST /api/v1/quiz/markdown",
            "Convert PDF to Notion-style markdown",
        ),
    ]);

    HttpResponse::Ok().json(QuizInfoResponse {
        success: true,
        service: SERVICE_NAME,
        endpoints,
        limits: QuizLimitsInfo::from(&state.config.quiz_limits),
    })
}

#[post("/api/v1/quiz/topic")]
pub async fn generate_topic_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<TopicQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let (topic, num_questions) = request
        .into_inner()
        .into_validated(&state.config.quiz_limits)?;

    log::info!(
        "[{}] Generating quiz for topic: \"{}\" with {} questions",
        request_label(&req),
        topic,
        num_questions
    );

    let result = state
        .quiz_service
        .generate_topic_quiz(&topic, num_questions)
        .await
        .map_err(|e| {
            log::error!("[{}] Error generating topic quiz: {}", request_label(&req), e);
            e
        })?;

    Ok(success_json(result))
}

#[post("/api/v1/quiz/pdf")]
pub async fn generate_pdf_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let upload = receive(&state, payload).await?;

    // Returning early drops `upload`, which removes the saved file.
    let num_questions = resolve_num_questions(
        upload
            .num_questions
            .clone()
            .map(NumQuestionsInput::Text)
            .as_ref(),
        &state.config.quiz_limits,
    )?;

    log::info!(
        "[{}] Processing PDF: {} ({} bytes)",
        request_label(&req),
        upload.original_name,
        upload.size
    );

    let result = state
        .quiz_service
        .generate_document_quiz(upload.path(), num_questions)
        .await
        .map_err(|e| {
            log::error!("[{}] Error generating PDF quiz: {}", request_label(&req), e);
            e
        })?;

    Ok(success_json(result))
}

#[post("/api/v1/quiz/summarize")]
pub async fn summarize_pdf(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let upload = receive(&state, payload).await?;

    log::info!(
        "[{}] Summarizing PDF: {} ({} bytes)",
        request_label(&req),
        upload.original_name,
        upload.size
    );

    let summary = state
        .quiz_service
        .summarize_document(upload.path())
        .await
        .map_err(|e| {
            log::error!("[{}] Error summarizing PDF: {}", request_label(&req), e);
            e
        })?;

    Ok(success_json(SummaryData { summary }))
}

#[post("/api/v1/quiz/markdown")]
pub async fn convert_pdf_to_markdown(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let upload = receive(&state, payload).await?;

    log::info!(
        "[{}] Converting PDF to markdown: {} ({} bytes)",
        request_label(&req),
        upload.original_name,
        upload.size
    );

    let markdown = state
        .quiz_service
        .convert_document_to_markdown(upload.path())
        .await
        .map_err(|e| {
            log::error!("[{}] Error converting PDF to markdown: {}", request_label(&req), e);
            e
        })?;

    Ok(success_json(MarkdownData { markdown }))
}

async fn receive(state: &AppState, payload: Multipart) -> Result<PdfUpload, AppError> {
    receive_pdf_upload(payload, &state.config.quiz_limits, &state.config.upload_dir).await
}

fn request_label(req: &HttpRequest) -> String {
    get_request_id(req).unwrap_or_else(|| "-".to_string())
}
