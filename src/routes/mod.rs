//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every endpoint speaks JSON and every error body is `{"error": message}`.
//! Unknown paths and unsupported methods on known paths both answer 404, and
//! CORS is open to any origin for the static page that hosts the letter.

pub mod decorations;
pub mod notes;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(notes::health))
        .route("/api/submit", post(notes::submit))
        .route("/api/notes", get(notes::list))
        .route("/api/decorations", post(decorations::layout))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON error body with `status`.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
