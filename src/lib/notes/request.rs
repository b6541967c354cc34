//! This module declares all types that may be used as request payloads.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The conventional shape of a created note. The server accepts any JSON
/// object, this is what the client sends.
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateNoteRequest {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateNoteRequest {
    /// `None` when the key is missing, `Some(Value::Null)` for an explicit
    /// `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_description_differ() {
        let missing: UpdateNoteRequest = serde_json::from_value(json!({})).unwrap();
        let null: UpdateNoteRequest =
            serde_json::from_value(json!({ "description": null })).unwrap();

        assert_eq!(missing.description, None);
        assert_eq!(null.description, Some(Value::Null));
    }
}
