//! An in-memory note store served over HTTP.
//!
//! [`app`] builds the router; binding it to a listener is up to the host
//! process.
use axum::{
    routing::{get, patch},
    Extension, Router,
};

pub mod config;
pub mod notes;
pub mod state;

pub use notes::{request, response};

use notes::routes::{create_note, delete_note, list_notes, update_note};
use state::SharedState;

/// Builds the note routes over the given state.
pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:index", patch(update_note).delete(delete_note))
        .layer(Extension(state))
}
