//! Health and note endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Json, Response};
use serde::Serialize;
use tracing::{error, info};

use crate::routes::error_response;
use crate::services::notes::{self, Backend, NoteError, NoteRow};
use crate::state::AppState;

#[cfg(test)]
#[path = "notes_test.rs"]
mod tests;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub db_type: Backend,
    pub db_connected: bool,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<NoteRow>,
}

/// `GET /api/health`: liveness plus database status.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        db_type: state.notes.backend(),
        db_connected: state.notes.is_connected().await,
        timestamp: notes::now_iso(),
    })
}

/// `POST /api/submit`: store a reply to a marginal note.
///
/// The body is taken raw so malformed JSON gets the same error shape as
/// every other failure.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Result<Json<SubmitResponse>, Response> {
    let note = notes::parse_submission(&body).map_err(note_error_response)?;
    let id = state.notes.save(&note).await.map_err(note_error_response)?;
    info!(id, note_id = %note.note_id, "note saved");
    Ok(Json(SubmitResponse { success: true, id }))
}

/// `GET /api/notes`: every stored note, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<NotesResponse>, Response> {
    let notes = state.notes.list_all().await.map_err(note_error_response)?;
    Ok(Json(NotesResponse { notes }))
}

pub(crate) fn note_error_to_status(err: &NoteError) -> StatusCode {
    match err {
        NoteError::InvalidJson(_) | NoteError::MissingFields => StatusCode::BAD_REQUEST,
        NoteError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn note_error_response(err: NoteError) -> Response {
    let status = note_error_to_status(&err);
    if status.is_server_error() {
        error!(error = %err, "note storage failed");
    }
    error_response(status, err.to_string())
}
