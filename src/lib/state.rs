//! This module store the type for the collective state of the application.
use std::sync::{Arc, RwLock};

use crate::{config::NoteSchema, notes::store::NoteStore};

/// The state shared by every request handler.
pub type SharedState = Arc<RwLock<AppState>>;

/// The shared state for the application.
#[derive(Debug)]
pub struct AppState {
    /// Every note created since startup, holes included.
    pub notes: NoteStore,
    /// How strictly incoming notes are checked.
    pub schema: NoteSchema,
}

impl AppState {
    /// Creates a new [`AppState`] with an empty store.
    pub fn new(schema: NoteSchema) -> Self {
        AppState {
            notes: NoteStore::new(),
            schema,
        }
    }

    /// Wraps a new [`AppState`] for sharing across handlers.
    pub fn shared(schema: NoteSchema) -> SharedState {
        Arc::new(RwLock::new(Self::new(schema)))
    }
}
