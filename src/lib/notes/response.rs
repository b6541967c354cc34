//! This module declares all types that may be used as response payloads.
use serde::{Deserialize, Serialize};

use super::Note;

pub const NOTE_CREATED: &str = "note created succcessfully";
pub const NOTES_FETCHED: &str = "notes fetched successfully";
pub const NOTE_UPDATED: &str = "note updated successfully";
pub const NOTE_DELETED: &str = "note deleted successfully";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// The list body keys its message as `Message`, unlike every other response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ListNotesResponse {
    #[serde(rename = "Message")]
    pub message: String,
    pub notes: Vec<Option<Note>>,
}

/// The body produced by [`NoteError`](super::NoteError).
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
