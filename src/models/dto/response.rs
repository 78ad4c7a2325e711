use std::collections::BTreeMap;

use serde::Serialize;

use crate::{config::QuizLimits, models::domain::Summary};

pub const SERVICE_NAME: &str = "Quiz Generator API";

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryData {
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct MarkdownData {
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizLimitsInfo {
    pub max_questions: u32,
    pub min_questions: u32,
    pub max_file_size: String,
    pub supported_formats: Vec<&'static str>,
}

impl From<&QuizLimits> for QuizLimitsInfo {
    fn from(limits: &QuizLimits) -> Self {
        Self {
            max_questions: limits.max_questions,
            min_questions: limits.min_questions,
            max_file_size: limits.max_upload_label(),
            supported_formats: vec!["PDF"],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizInfoResponse {
    pub success: bool,
    pub service: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub limits: QuizLimitsInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub success: bool,
    pub error: &'static str,
    pub requested_path: String,
    pub method: String,
    pub available_endpoints: Vec<&'static str>,
}
