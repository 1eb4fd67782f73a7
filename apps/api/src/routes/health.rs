use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Welcome message, mirrors the service root the frontend probes on startup.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Resume Generator API"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    }))
}
