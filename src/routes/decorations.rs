//! Margin decoration layout endpoint.
//!
//! Lets a host that cannot run the engine itself (a static page, a
//! screenshot job) post its measurements and get back ready-to-draw strokes.
//! The layout is deterministic, so identical measurements always produce an
//! identical response and clients may cache it by body.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{Json, Response};
use doodles::layer::{Scene, StrokeList, render_decorations};
use doodles::path::Stroke;
use doodles::placement::PlacedMark;
use serde::Serialize;
use tracing::debug;

use crate::routes::error_response;

#[cfg(test)]
#[path = "decorations_test.rs"]
mod tests;

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub width: f64,
    pub height: f64,
    pub marks: Vec<PlacedMark>,
    pub strokes: Vec<Stroke>,
}

/// `POST /api/decorations`: lay out the margin layer for a measured page.
pub async fn layout(body: Bytes) -> Result<Json<LayoutResponse>, Response> {
    let scene: Scene =
        serde_json::from_slice(&body).map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid JSON"))?;

    let mut surface = StrokeList::new();
    let marks = render_decorations(&mut surface, &scene);
    debug!(marks = marks.len(), strokes = surface.strokes.len(), "decorations laid out");

    Ok(Json(LayoutResponse { width: surface.width, height: surface.height, marks, strokes: surface.strokes }))
}
