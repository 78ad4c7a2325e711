use actix_web::{HttpRequest, HttpResponse};

use crate::models::dto::response::{ApiResponse, NotFoundResponse};

pub const AVAILABLE_ENDPOINTS: [&str; 6] = [
    "GET /health",
    "GET /api/v1/quiz",
    "POST /api/v1/quiz/topic",
    "POST /api/v1/quiz/pdf",
    "POST /api/v1/quiz/summarize",
    "POST /api/v1/quiz/markdown",
];

/// Creates a success JSON response wrapped in the `{success, data}` envelope
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(data))
}

/// Creates the JSON body for unknown routes
pub fn not_found(req: &HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundResponse {
        success: false,
        error: "Endpoint not found",
        requested_path: req.path().to_string(),
        method: req.method().to_string(),
        available_endpoints: AVAILABLE_ENDPOINTS.to_vec(),
    })
}
