//! Axum route handlers for the AI polish API.
//!
//! Both endpoints are best-effort by contract: on any LLM failure the caller
//! gets a usable response (the original text, or an empty summary) plus an
//! `error` field, never a 5xx.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /ai/optimize
///
/// Polishes a free-text field. Echoes the input unchanged when the backend is
/// unavailable.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    match state.polisher.polish(&request.text).await {
        Ok(optimized_text) => Ok(Json(OptimizeResponse {
            optimized_text,
            error: None,
        })),
        Err(e) => {
            warn!("Polish failed, echoing input: {e}");
            Ok(Json(OptimizeResponse {
                optimized_text: request.text,
                error: Some(e.to_string()),
            }))
        }
    }
}

/// POST /ai/summary
///
/// Drafts a professional summary from the submitted record.
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Result<Json<SummaryResponse>, AppError> {
    match state.polisher.summarize(&data).await {
        Ok(summary) => Ok(Json(SummaryResponse {
            summary,
            error: None,
        })),
        Err(e) => {
            warn!("Summary generation failed: {e}");
            Ok(Json(SummaryResponse {
                summary: String::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}
