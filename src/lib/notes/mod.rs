//! Module containing everything pertaining to notes.
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

pub mod request;
pub mod response;
pub mod routes;
pub mod store;

/// A note is any JSON object. `title` and `description` are conventional
/// but only enforced under [`NoteSchema::Strict`](crate::config::NoteSchema).
pub type Note = Map<String, Value>;

/// An error type for all errors that may happen while handling notes.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Note not found at index {0:?}")]
    NotFound(String),
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Operation could not be completed")]
    OperationFailed,
}

impl IntoResponse for NoteError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidNote(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::OperationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": format!("{self}")
        }));

        (status, body).into_response()
    }
}

/// The `:index` path segment of a note route.
///
/// `position` is only set when `raw` is a canonical decimal, so `"01"` or
/// `"+1"` name no slot at all.
#[derive(Debug)]
pub struct NoteIndex {
    pub raw: String,
    pub position: Option<usize>,
}

impl NoteIndex {
    pub fn parse(raw: String) -> Self {
        let position = raw
            .parse::<usize>()
            .ok()
            .filter(|position| position.to_string() == raw);

        Self { raw, position }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for NoteIndex
where
    S: Send + Sync,
{
    type Rejection = NoteError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(NoteIndex::parse(raw)),
            Err(rejection) => {
                // an undecodable segment names no slot
                debug!("index segment could not be extracted: {rejection}");
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();

                Ok(NoteIndex {
                    raw: raw.to_string(),
                    position: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_indices_have_a_position() {
        assert_eq!(NoteIndex::parse("0".to_string()).position, Some(0));
        assert_eq!(NoteIndex::parse("42".to_string()).position, Some(42));
    }

    #[test]
    fn non_canonical_indices_have_no_position() {
        for raw in ["01", "+1", "-1", " 1", "1.0", "abc", ""] {
            let index = NoteIndex::parse(raw.to_string());
            assert_eq!(index.position, None, "{raw:?} should not name a slot");
            assert_eq!(index.raw, raw);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = NoteError::NotFound("7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_note_maps_to_422() {
        let response = NoteError::InvalidNote("missing title".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
