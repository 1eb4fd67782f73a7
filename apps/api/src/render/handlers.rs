//! Axum route handlers for the document generation API.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::render;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// POST /generate/pdf
///
/// Renders the submitted record as a PDF attachment.
pub async fn handle_generate_pdf(Json(data): Json<ResumeData>) -> Result<Response, AppError> {
    let template = data.template.clone();
    let bytes = run_render(move || render::render_pdf(&data)).await?;
    info!(template = %template, bytes = bytes.len(), "Rendered PDF");
    Ok(attachment("application/pdf", "resume.pdf", bytes))
}

/// POST /generate/docx
///
/// Renders the submitted record as a DOCX attachment.
pub async fn handle_generate_docx(Json(data): Json<ResumeData>) -> Result<Response, AppError> {
    let template = data.template.clone();
    let bytes = run_render(move || render::render_docx(&data)).await?;
    info!(template = %template, bytes = bytes.len(), "Rendered DOCX");
    Ok(attachment(DOCX_CONTENT_TYPE, "resume.docx", bytes))
}

/// Rendering is CPU-bound and synchronous; keep it off the async workers.
async fn run_render<F>(render_fn: F) -> Result<Vec<u8>, AppError>
where
    F: FnOnce() -> Result<Vec<u8>, render::RenderError> + Send + 'static,
{
    tokio::task::spawn_blocking(render_fn)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))?
        .map_err(AppError::from)
}

fn attachment(content_type: &'static str, filename: &'static str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        Bytes::from(bytes),
    )
        .into_response()
}
