//! This module includes all routes used for notes.
use axum::{http::StatusCode, Extension, Json};
use tracing::{debug, error, instrument, warn};

use super::{
    request::UpdateNoteRequest,
    response::{
        ListNotesResponse, MessageResponse, NOTES_FETCHED, NOTE_CREATED, NOTE_DELETED,
        NOTE_UPDATED,
    },
    Note, NoteError, NoteIndex,
};
use crate::state::SharedState;

fn lock_failed<E: std::fmt::Debug>(err: E) -> NoteError {
    error!("error acquiring the lock for app state: {:?}", err);
    NoteError::OperationFailed
}

/// Appends the request body to the collection as-is.
#[instrument(skip(state, note))]
pub async fn create_note(
    Extension(state): Extension<SharedState>,
    Json(note): Json<Note>,
) -> Result<(StatusCode, Json<MessageResponse>), NoteError> {
    let mut state = state.write().map_err(lock_failed)?;

    state.schema.check_note(&note).map_err(|err| {
        warn!("rejected note: {err}");
        err
    })?;

    let index = state.notes.push(note);

    debug!("created note at index {index}");

    Ok((StatusCode::CREATED, Json(MessageResponse::new(NOTE_CREATED))))
}

/// Returns every slot of the collection, holes included.
#[instrument(skip(state))]
pub async fn list_notes(
    Extension(state): Extension<SharedState>,
) -> Result<Json<ListNotesResponse>, NoteError> {
    let state = state.read().map_err(lock_failed)?;

    debug!("listing {} note slots", state.notes.len());

    Ok(Json(ListNotesResponse {
        message: NOTES_FETCHED.to_string(),
        notes: state.notes.slots().to_vec(),
    }))
}

/// Overwrites the description of an existing note.
#[instrument(skip(state, payload))]
pub async fn update_note(
    Extension(state): Extension<SharedState>,
    index: NoteIndex,
    Json(payload): Json<UpdateNoteRequest>,
) -> Result<Json<MessageResponse>, NoteError> {
    let mut state = state.write().map_err(lock_failed)?;

    let Some(position) = index
        .position
        .filter(|&position| state.notes.get(position).is_some())
    else {
        warn!("attempted to update missing note {:?}", index.raw);
        return Err(NoteError::NotFound(index.raw));
    };

    state.schema.check_description(payload.description.as_ref())?;
    state.notes.set_description(position, payload.description);

    debug!("updated note {:?}", index.raw);

    Ok(Json(MessageResponse::new(NOTE_UPDATED)))
}

/// Clears the slot at the given index. Succeeds whether or not a note was
/// there.
#[instrument(skip(state))]
pub async fn delete_note(
    Extension(state): Extension<SharedState>,
    index: NoteIndex,
) -> Result<Json<MessageResponse>, NoteError> {
    let mut state = state.write().map_err(lock_failed)?;

    let removed = index
        .position
        .map(|position| state.notes.clear(position))
        .unwrap_or(false);

    if removed {
        debug!("deleted note {:?}", index.raw);
    } else {
        debug!("nothing to delete at {:?}", index.raw);
    }

    Ok(Json(MessageResponse::new(NOTE_DELETED)))
}
