use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::{
    errors::ExtractionError,
    models::domain::{ExtractedText, SourceContent},
};

/// Produces plain text for a source. Topics pass through untouched; documents
/// are read fully into memory and parsed as PDF. The document is left on disk.
pub async fn extract(source: &SourceContent) -> Result<ExtractedText, ExtractionError> {
    match source {
        SourceContent::Topic(text) => Ok(ExtractedText::new(text.clone())),
        SourceContent::Document(path) => extract_pdf_text(path).await.map(ExtractedText::new),
    }
}

pub async fn extract_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    let display = path.display().to_string();

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExtractionError::Missing(display.clone())
        } else {
            ExtractionError::Io {
                path: display.clone(),
                message: e.to_string(),
            }
        }
    })?;

    log::debug!("Read {} bytes from {}", bytes.len(), display);

    let owned_path = PathBuf::from(path);
    tokio::task::spawn_blocking(move || extract_text_from_bytes(&owned_path, &bytes))
        .await
        .map_err(|e| ExtractionError::Parse {
            path: display,
            message: format!("extraction task failed: {}", e),
        })?
}

fn extract_text_from_bytes(path: &Path, bytes: &[u8]) -> Result<String, ExtractionError> {
    let display = path.display().to_string();

    let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractionError::Parse {
        path: display.clone(),
        message: format!("Failed to load PDF: {}", e),
    })?;

    let pages = doc.get_pages();
    log::debug!("Extracting text from {} pages of {}", pages.len(), display);

    let mut text = String::new();
    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                log::warn!(
                    "Failed to extract text from page {} of {}, skipping: {}",
                    page_num,
                    display,
                    e
                );
            }
        }
    }

    let cleaned = clean_text(&text);
    if cleaned.is_empty() {
        return Err(ExtractionError::Empty(display));
    }
    Ok(cleaned)
}

/// Collapses whitespace runs and strips byte-order marks.
fn clean_text(text: &str) -> String {
    text.replace('\u{FEFF}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Takes ownership of an uploaded file. Dropping the returned path removes the
/// file, so it also goes away when the owning request is cancelled.
pub fn own_upload(path: &Path) -> TempPath {
    TempPath::from_path(path)
}

/// Removes an uploaded file now. Missing files are ignored and failures are only logged.
pub fn cleanup_file(file: TempPath) {
    let path = file.to_path_buf();
    match file.close() {
        Ok(()) => log::debug!("Removed uploaded file {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::error!("Failed to cleanup file {}: {}", path.display(), e),
    }
}
