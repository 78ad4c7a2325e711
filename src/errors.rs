use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failure to turn a source into plain text.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Document not found: {0}")]
    Missing(String),

    #[error("Failed to read document {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to extract text from PDF {path}: {message}")]
    Parse { path: String, message: String },

    #[error("No text content extracted from {0}")]
    Empty(String),
}

/// Failure of a completion call itself.
#[derive(Debug, Clone, Error)]
pub enum OracleError {
    #[error("Completion request failed: {0}")]
    Request(String),

    #[error("Completion returned no content")]
    EmptyResponse,
}

/// Model output that could not be coerced into questions. Every variant keeps
/// the raw response so it can be reported back for diagnosis.
#[derive(Debug, Clone, Error)]
pub enum ResponseParseError {
    #[error("Failed to parse JSON from AI response")]
    Malformed { raw_response: String },

    #[error("AI response does not match the question schema: {message}")]
    Schema {
        message: String,
        raw_response: String,
    },

    #[error("Question {id} is invalid: {message}")]
    InvalidQuestion {
        id: u32,
        message: String,
        raw_response: String,
    },
}

impl ResponseParseError {
    pub fn raw_response(&self) -> &str {
        match self {
            ResponseParseError::Malformed { raw_response }
            | ResponseParseError::Schema { raw_response, .. }
            | ResponseParseError::InvalidQuestion { raw_response, .. } => raw_response,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Model error: {0}")]
    OracleError(String),

    #[error("Model call timed out: {0}")]
    OracleTimeout(String),

    #[error("Response parse error: {message}")]
    ResponseParseError {
        message: String,
        raw_response: String,
    },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::ExtractionError(_) => "EXTRACTION_ERROR",
            AppError::OracleError(_) => "ORACLE_ERROR",
            AppError::OracleTimeout(_) => "ORACLE_TIMEOUT",
            AppError::ResponseParseError { .. } => "RESPONSE_PARSE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    fn error_title(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not found",
            AppError::ValidationError(_) => "Validation error",
            AppError::OracleTimeout(_) => "Gateway timeout",
            _ => "Internal server error",
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::ValidationError(msg)
            | AppError::ConfigError(msg)
            | AppError::ExtractionError(msg)
            | AppError::OracleError(msg)
            | AppError::OracleTimeout(msg)
            | AppError::InternalError(msg) => msg.clone(),
            AppError::ResponseParseError { message, .. } => message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::OracleTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::ConfigError(_)
            | AppError::ExtractionError(_)
            | AppError::OracleError(_)
            | AppError::ResponseParseError { .. }
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let raw_response = match self {
            AppError::ResponseParseError { raw_response, .. } => Some(raw_response.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.error_title().to_string(),
            message: Some(self.detail()),
            code: self.error_code(),
            raw_response,
        })
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::ExtractionError(err.to_string())
    }
}
impl From<OracleError> for AppError {
    fn from(err: OracleError) -> Self {
        AppError::OracleError(err.to_string())
    }
}
impl From<ResponseParseError> for AppError {
    fn from(err: ResponseParseError) -> Self {
        AppError::ResponseParseError {
            message: err.to_string(),
            raw_response: err.raw_response().to_string(),
        }
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::ValidationError(format!("File upload error: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(format!("I/O error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
