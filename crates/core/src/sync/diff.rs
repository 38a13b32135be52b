//! Set difference between source notes and known identifiers

use std::collections::HashSet;

use notebridge_domain::Note;

/// Select the notes whose `note_id` is not yet known to the destination
///
/// Membership is a hash lookup; relative order of the surviving notes is
/// preserved.
#[must_use]
pub fn select_new_notes(notes: Vec<Note>, known: &HashSet<String>) -> Vec<Note> {
    notes.into_iter().filter(|note| !known.contains(&note.note_id)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn note(id: &str) -> Note {
        serde_json::from_value(json!({"note_id": id})).unwrap()
    }

    #[test]
    fn filters_known_ids_preserving_order() {
        let notes = vec![note("a"), note("b"), note("c")];
        let known: HashSet<String> = ["b".to_string()].into_iter().collect();

        let new = select_new_notes(notes, &known);

        let ids: Vec<&str> = new.iter().map(|n| n.note_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn empty_known_set_keeps_everything() {
        let notes = vec![note("a"), note("b")];
        let new = select_new_notes(notes, &HashSet::new());
        assert_eq!(new.len(), 2);
    }

    #[test]
    fn fully_known_source_yields_nothing() {
        let notes = vec![note("a"), note("b")];
        let known: HashSet<String> =
            ["a".to_string(), "b".to_string()].into_iter().collect();
        assert!(select_new_notes(notes, &known).is_empty());
    }
}
