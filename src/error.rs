use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::questions::NormalizeError;

/// Boundary error taxonomy. Client input errors map to 400, document
/// processing and unexpected errors to 500; every body is
/// `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No template file provided")]
    MissingTemplate,
    #[error("No selected file")]
    NoSelectedFile,
    #[error("Invalid file type. Only .docx files are allowed")]
    InvalidFileType,
    #[error("No questions provided")]
    MissingQuestions,
    #[error("Invalid JSON format for questions")]
    InvalidJson,
    #[error("invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingTemplate
            | ApiError::NoSelectedFile
            | ApiError::InvalidFileType
            | ApiError::MissingQuestions
            | ApiError::InvalidJson
            | ApiError::Multipart(_)
            | ApiError::Normalize(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("document generation failed: {}", self);
        } else {
            warn!("rejected request: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
