use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::questions::normalize;
use crate::server::AppState;
use crate::writer::append_questions;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const ATTACHMENT: &str = "attachment; filename=question_paper.docx";

type AppStateArc = Arc<AppState>;

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

pub fn generate_routes() -> Router<AppStateArc> {
    Router::new().route("/generate-document", post(generate_document))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Accepts a multipart form with a `template` file and a `questions` JSON
/// string, and streams back the augmented document.
///
/// Validation order follows the wire contract: template presence, filename,
/// extension, questions presence, JSON syntax, question structure.
async fn generate_document(
    State(state): State<AppStateArc>,
    mut multipart: Multipart,
) -> Result<(HeaderMap, Vec<u8>), ApiError> {
    let mut template: Option<(String, Bytes)> = None;
    let mut questions_json: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            // A part without a filename is a plain form value, not a file.
            "template" => {
                if let Some(filename) = field.file_name().map(str::to_string) {
                    let data = field.bytes().await?;
                    template = Some((filename, data));
                }
            }
            "questions" => questions_json = Some(field.text().await?),
            _ => {}
        }
    }

    let (filename, template_bytes) = template.ok_or(ApiError::MissingTemplate)?;
    if filename.is_empty() {
        return Err(ApiError::NoSelectedFile);
    }
    if !state.config.is_allowed(&filename) {
        return Err(ApiError::InvalidFileType);
    }

    let questions_json = questions_json
        .filter(|raw| !raw.is_empty())
        .ok_or(ApiError::MissingQuestions)?;
    let raw: Value = serde_json::from_str(&questions_json).map_err(|_| ApiError::InvalidJson)?;
    let questions = normalize(&raw)?;

    let generated = append_questions(&template_bytes, &questions)?;
    info!(
        "generated question paper: {} questions, template {} bytes -> {} bytes",
        questions.len(),
        template_bytes.len(),
        generated.len()
    );

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(ATTACHMENT),
    );
    Ok((headers, generated))
}
