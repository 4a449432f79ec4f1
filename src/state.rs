//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared resource is the note store; the decoration engine is pure and
//! needs no state.

use std::sync::Arc;

use crate::services::notes::NoteStore;

/// Clone is required by Axum; the store is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
}

impl AppState {
    #[must_use]
    pub fn new(notes: Arc<dyn NoteStore>) -> Self {
        Self { notes }
    }
}
