use actix_web::{get, HttpResponse};
use chrono::Utc;

use crate::models::dto::response::{HealthResponse, SERVICE_NAME};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
