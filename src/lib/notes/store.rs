//! The in-memory note collection.
use serde_json::Value;

use super::Note;

/// An ordered sequence of note slots addressed by position.
///
/// Deleting a note leaves a hole (`None`) in its slot; the collection never
/// shrinks, so every other note keeps its index.
#[derive(Debug, Default)]
pub struct NoteStore {
    slots: Vec<Option<Note>>,
}

impl NoteStore {
    /// Creates a new, empty [`NoteStore`].
    pub fn new() -> Self {
        NoteStore { slots: Vec::new() }
    }

    /// Appends a note and returns the index it was stored at.
    pub fn push(&mut self, note: Note) -> usize {
        self.slots.push(Some(note));
        self.slots.len() - 1
    }

    /// All slots in order, holes included.
    pub fn slots(&self) -> &[Option<Note>] {
        &self.slots
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the note at `index`, or `None` for holes and out of range
    /// indices.
    pub fn get(&self, index: usize) -> Option<&Note> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Note> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Overwrites the `description` of the note at `index`. An absent
    /// description removes the field. Returns `false` when there is no note
    /// at `index`.
    pub fn set_description(&mut self, index: usize, description: Option<Value>) -> bool {
        let Some(note) = self.get_mut(index) else {
            return false;
        };

        match description {
            Some(description) => {
                note.insert("description".to_string(), description);
            }
            None => {
                note.remove("description");
            }
        }

        true
    }

    /// Clears the slot at `index`. Returns whether a note was removed.
    pub fn clear(&mut self, index: usize) -> bool {
        self.slots
            .get_mut(index)
            .map(|slot| slot.take().is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn note(title: &str, description: &str) -> Note {
        match json!({ "title": title, "description": description }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn push_returns_consecutive_indices() {
        let mut store = NoteStore::new();
        assert!(store.is_empty());
        assert_eq!(store.push(note("a", "1")), 0);
        assert_eq!(store.push(note("b", "2")), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_leaves_a_hole() {
        let mut store = NoteStore::new();
        store.push(note("a", "1"));
        store.push(note("b", "2"));

        assert!(store.clear(0));
        assert_eq!(store.len(), 2);
        assert!(store.slots()[0].is_none());
        assert_eq!(store.slots()[1], Some(note("b", "2")));

        // a second clear, or one past the end, changes nothing
        assert!(!store.clear(0));
        assert!(!store.clear(10));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn set_description_keeps_other_fields() {
        let mut store = NoteStore::new();
        let mut original = note("T", "D");
        original.insert("tags".to_string(), json!(["x"]));
        store.push(original);

        assert!(store.set_description(0, Some(json!("D2"))));

        let updated = store.slots()[0].as_ref().unwrap();
        assert_eq!(updated["title"], json!("T"));
        assert_eq!(updated["description"], json!("D2"));
        assert_eq!(updated["tags"], json!(["x"]));
    }

    #[test]
    fn set_description_without_value_removes_the_field() {
        let mut store = NoteStore::new();
        store.push(note("T", "D"));

        assert!(store.set_description(0, None));
        assert!(!store.slots()[0].as_ref().unwrap().contains_key("description"));
    }

    #[test]
    fn get_skips_holes() {
        let mut store = NoteStore::new();
        store.push(note("a", "1"));
        store.push(note("b", "2"));
        store.clear(0);

        assert!(store.get(0).is_none());
        assert_eq!(store.get(1), Some(&note("b", "2")));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn set_description_on_hole_or_missing_index_fails() {
        let mut store = NoteStore::new();
        store.push(note("T", "D"));
        store.clear(0);

        assert!(!store.set_description(0, Some(json!("D2"))));
        assert!(!store.set_description(99, Some(json!("D2"))));
        assert!(store.slots()[0].is_none());
    }
}
