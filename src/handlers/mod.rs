pub mod health_handler;
pub mod quiz_handler;
pub mod upload;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::{errors::AppError, services::http_helpers};

pub use health_handler::health_check;
pub use quiz_handler::{
    convert_pdf_to_markdown, generate_pdf_quiz, generate_topic_quiz, get_quiz_info, summarize_pdf,
};

/// Registers every route plus the JSON body error mapping.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(get_quiz_info)
        .service(generate_topic_quiz)
        .service(generate_pdf_quiz)
        .service(summarize_pdf)
        .service(convert_pdf_to_markdown);
}

/// Fallback for routes that match nothing above.
pub async fn not_found_handler(req: HttpRequest) -> HttpResponse {
    http_helpers::not_found(&req)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON body: {}", err);
    AppError::ValidationError(format!("Invalid JSON body: {}", err)).into()
}
