pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::generation::handlers::{self, MAX_UPLOAD_BYTES};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route(
            "/api/v1/portfolio/generate",
            post(handlers::handle_generate),
        )
        // The 10 MiB file cap is enforced in the handler; the body limit only
        // needs headroom for the multipart framing around a maximum-size file.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
        .with_state(state)
}
