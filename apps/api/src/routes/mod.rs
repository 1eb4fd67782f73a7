pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::polish::handlers as polish_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Document generation
        .route("/generate/pdf", post(render_handlers::handle_generate_pdf))
        .route("/generate/docx", post(render_handlers::handle_generate_docx))
        // AI polish
        .route("/ai/optimize", post(polish_handlers::handle_optimize))
        .route("/ai/summary", post(polish_handlers::handle_summary))
        .with_state(state)
}
