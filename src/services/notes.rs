//! Note service: validation and storage of reader replies.
//!
//! DESIGN
//! ======
//! Replies arrive as loosely-typed JSON from the reply windows. They are
//! validated into a [`NewNote`] here, then handed to a [`NoteStore`]. Two
//! stores exist, one per `sqlx` driver, behind a single async trait so
//! handlers never branch on the backend. Each store owns its pool and its own
//! SQL dialect; the schema is identical.
//!
//! ERROR HANDLING
//! ==============
//! Malformed bodies and missing required fields are client errors and never
//! reach the database. Storage failures surface as [`NoteError::Database`]
//! and are logged by the route layer before being reported.

#[cfg(test)]
#[path = "notes_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, SqlitePool};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Missing required fields")]
    MissingFields,
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// Which driver a store runs on. Serialized as the health check's `dbType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Backend {
    #[serde(rename = "postgresql")]
    Postgres,
    #[serde(rename = "sqlite")]
    Sqlite,
}

impl Backend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgresql",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Submission body as sent by a reply window.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitNoteBody {
    pub note_id: Option<String>,
    pub note_prompt: Option<String>,
    pub context: Option<String>,
    pub message: Option<String>,
    pub email: Option<String>,
    pub timestamp: Option<String>,
}

/// A validated note ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub note_id: String,
    pub note_prompt: Option<String>,
    pub context: Option<String>,
    pub message: String,
    pub email: Option<String>,
    pub timestamp: String,
}

/// A stored note. Field names match the table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteRow {
    pub id: i64,
    pub note_id: String,
    pub note_prompt: Option<String>,
    pub context: Option<String>,
    pub message: String,
    pub email: Option<String>,
    pub timestamp: String,
    pub created_at: Option<String>,
}

type NoteTuple = (i64, String, Option<String>, Option<String>, String, Option<String>, String, Option<String>);

impl From<NoteTuple> for NoteRow {
    fn from(
        (id, note_id, note_prompt, context, message, email, timestamp, created_at): NoteTuple,
    ) -> Self {
        Self { id, note_id, note_prompt, context, message, email, timestamp, created_at }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Parse and validate a raw submission body.
///
/// `noteId` and `message` must be present and non-empty. Empty optional
/// fields are stored as NULL, and a missing `timestamp` defaults to now.
///
/// # Errors
///
/// [`NoteError::InvalidJson`] if the body is not a JSON object of the
/// expected shape; [`NoteError::MissingFields`] if a required field is absent.
pub fn parse_submission(body: &[u8]) -> Result<NewNote, NoteError> {
    let body: SubmitNoteBody = serde_json::from_slice(body).map_err(NoteError::InvalidJson)?;

    let (Some(note_id), Some(message)) = (non_empty(body.note_id), non_empty(body.message)) else {
        return Err(NoteError::MissingFields);
    };

    Ok(NewNote {
        note_id,
        note_prompt: non_empty(body.note_prompt),
        context: non_empty(body.context),
        message,
        email: non_empty(body.email),
        timestamp: non_empty(body.timestamp).unwrap_or_else(now_iso),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Current UTC time as RFC 3339.
#[must_use]
pub fn now_iso() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

// =============================================================================
// STORE
// =============================================================================

/// Persistent note storage. Enables swapping drivers and in-memory tests.
#[async_trait::async_trait]
pub trait NoteStore: Send + Sync {
    fn backend(&self) -> Backend;

    /// Insert a note and return its row id.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Database`] if the insert fails.
    async fn save(&self, note: &NewNote) -> Result<i64, NoteError>;

    /// All notes, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Database`] if the query fails.
    async fn list_all(&self) -> Result<Vec<NoteRow>, NoteError>;

    /// Whether the pool can still reach the database.
    async fn is_connected(&self) -> bool;

    /// Close the pool, waiting for checked-out connections to return.
    async fn close(&self);
}

const SELECT_NOTES: &str = "SELECT id, note_id, note_prompt, context, message, email, timestamp, \
     CAST(created_at AS TEXT) FROM notes ORDER BY created_at DESC, id DESC";

pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl NoteStore for PgNoteStore {
    fn backend(&self) -> Backend {
        Backend::Postgres
    }

    async fn save(&self, note: &NewNote) -> Result<i64, NoteError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO notes (note_id, note_prompt, context, message, email, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&note.note_id)
        .bind(&note.note_prompt)
        .bind(&note.context)
        .bind(&note.message)
        .bind(&note.email)
        .bind(&note.timestamp)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<NoteRow>, NoteError> {
        let rows = sqlx::query_as::<_, NoteTuple>(SELECT_NOTES).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(NoteRow::from).collect())
    }

    async fn is_connected(&self) -> bool {
        !self.pool.is_closed() && sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

pub struct SqliteNoteStore {
    pool: SqlitePool,
}

impl SqliteNoteStore {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl NoteStore for SqliteNoteStore {
    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    async fn save(&self, note: &NewNote) -> Result<i64, NoteError> {
        let result = sqlx::query(
            "INSERT INTO notes (note_id, note_prompt, context, message, email, timestamp)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&note.note_id)
        .bind(&note.note_prompt)
        .bind(&note.context)
        .bind(&note.message)
        .bind(&note.email)
        .bind(&note.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list_all(&self) -> Result<Vec<NoteRow>, NoteError> {
        let rows = sqlx::query_as::<_, NoteTuple>(SELECT_NOTES).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(NoteRow::from).collect())
    }

    async fn is_connected(&self) -> bool {
        !self.pool.is_closed() && sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
