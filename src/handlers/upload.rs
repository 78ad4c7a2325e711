use std::path::Path;

use actix_multipart::{Field, Multipart};
use futures::StreamExt;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;

use crate::{
    config::QuizLimits,
    errors::{AppError, AppResult},
    services::extractor::cleanup_file,
};

pub const PDF_FIELD: &str = "pdf";
pub const NUM_QUESTIONS_FIELD: &str = "numQuestions";
const PDF_MIME: &str = "application/pdf";
const MAX_TEXT_FIELD_BYTES: usize = 64;

/// A PDF streamed to disk plus the form fields sent alongside it.
/// The file is removed when the upload is dropped.
#[derive(Debug)]
pub struct PdfUpload {
    file: TempPath,
    pub original_name: String,
    pub size: usize,
    pub num_questions: Option<String>,
}

impl PdfUpload {
    pub fn path(&self) -> &Path {
        &self.file
    }
}

#[derive(Debug)]
struct SavedFile {
    file: TempPath,
    original_name: String,
    size: usize,
}

#[derive(Debug, Default)]
struct UploadState {
    file: Option<SavedFile>,
    num_questions: Option<String>,
}

/// Reads the multipart payload, writing the `pdf` field under `upload_dir`.
/// Any partially written file is removed when the upload is rejected.
pub async fn receive_pdf_upload(
    mut payload: Multipart,
    limits: &QuizLimits,
    upload_dir: &Path,
) -> AppResult<PdfUpload> {
    let mut state = UploadState::default();

    if let Err(e) = read_fields(&mut payload, limits, upload_dir, &mut state).await {
        if let Some(saved) = state.file.take() {
            cleanup_file(saved.file);
        }
        return Err(e);
    }

    let file = state
        .file
        .ok_or_else(|| AppError::ValidationError("PDF file is required".to_string()))?;

    Ok(PdfUpload {
        file: file.file,
        original_name: file.original_name,
        size: file.size,
        num_questions: state.num_questions,
    })
}

async fn read_fields(
    payload: &mut Multipart,
    limits: &QuizLimits,
    upload_dir: &Path,
    state: &mut UploadState,
) -> AppResult<()> {
    while let Some(field) = payload.next().await {
        let mut field = field?;
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            PDF_FIELD => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();
                // Browsers send an empty part when no file was chosen.
                if filename.is_empty() {
                    drain(&mut field).await?;
                    continue;
                }
                if state.file.is_some() {
                    return Err(AppError::ValidationError(
                        "Only one PDF file may be uploaded".to_string(),
                    ));
                }
                let is_pdf = field
                    .content_type()
                    .is_some_and(|mime| mime.essence_str() == PDF_MIME);
                if !is_pdf {
                    return Err(AppError::ValidationError(
                        "Only PDF files are allowed".to_string(),
                    ));
                }
                save_pdf(&mut field, filename, limits, upload_dir, state).await?;
            }
            NUM_QUESTIONS_FIELD => {
                let mut value = Vec::new();
                while let Some(chunk) = field.next().await {
                    value.extend_from_slice(&chunk?);
                    if value.len() > MAX_TEXT_FIELD_BYTES {
                        return Err(AppError::ValidationError(format!(
                            "Number of questions must be between {} and {}",
                            limits.min_questions, limits.max_questions
                        )));
                    }
                }
                state.num_questions = Some(String::from_utf8_lossy(&value).trim().to_string());
            }
            _ => drain(&mut field).await?,
        }
    }
    Ok(())
}

async fn save_pdf(
    field: &mut Field,
    original_name: String,
    limits: &QuizLimits,
    upload_dir: &Path,
    state: &mut UploadState,
) -> AppResult<()> {
    let file = tempfile::Builder::new()
        .prefix("quiz-upload-")
        .suffix(".pdf")
        .tempfile_in(upload_dir)?
        .into_temp_path();
    let path = file.to_path_buf();

    state.file = Some(SavedFile {
        file,
        original_name,
        size: 0,
    });

    let mut out = tokio::fs::File::create(&path).await?;
    let mut size = 0usize;
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        size += chunk.len();
        if size > limits.max_upload_bytes {
            return Err(AppError::ValidationError(format!(
                "File too large. Maximum size is {}.",
                limits.max_upload_label()
            )));
        }
        out.write_all(&chunk).await?;
    }
    out.flush().await?;

    if let Some(file) = state.file.as_mut() {
        file.size = size;
    }
    Ok(())
}

async fn drain(field: &mut Field) -> AppResult<()> {
    while let Some(chunk) = field.next().await {
        chunk?;
    }
    Ok(())
}
