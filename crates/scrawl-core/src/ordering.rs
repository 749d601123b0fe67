//! Display-index assignment for note containers.
//!
//! The user-facing note numbers ("1", "2", "3", ...) are never stored on
//! the notes or patched incrementally. They are a pure function of the
//! current note membership and hidden flags, recomputed wholesale after
//! every structural mutation (including undo and redo). This keeps the
//! indices correct by construction: equal membership + hidden state yields
//! equal indices no matter which operation sequence produced it.

use std::collections::HashMap;

use crate::element::ElementId;
use crate::note::NoteElement;

/// Assign 1-based display indices to visible notes.
///
/// Notes are totally ordered by `created_order`; visible ones receive
/// consecutive indices starting at 1, hidden ones are absent from the map.
/// Revealing a hidden note therefore restores it at its original position
/// rather than appending it at the end.
///
/// Duplicate `created_order` values are a programming fault (the document's
/// counter is monotonic and survives undo), not a recoverable condition.
pub fn recompute_note_indices<'a, I>(notes: I) -> HashMap<ElementId, u32>
where
    I: IntoIterator<Item = &'a NoteElement>,
{
    let mut ordered: Vec<&NoteElement> = notes.into_iter().collect();
    ordered.sort_by_key(|note| note.created_order);
    debug_assert!(
        ordered
            .windows(2)
            .all(|pair| pair[0].created_order < pair[1].created_order),
        "duplicate created_order values"
    );

    let mut indices = HashMap::with_capacity(ordered.len());
    let mut next = 1u32;
    for note in ordered {
        if note.hidden {
            continue;
        }
        indices.insert(note.id, next);
        next += 1;
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;

    fn note(order: u64, hidden: bool) -> NoteElement {
        let mut note = NoteElement::with_bound(Bound::new(0.0, 0.0, 100.0, 80.0), order);
        note.hidden = hidden;
        note
    }

    #[test]
    fn test_all_visible() {
        let notes = [note(1, false), note(2, false), note(3, false)];
        let indices = recompute_note_indices(&notes);
        assert_eq!(indices[&notes[0].id], 1);
        assert_eq!(indices[&notes[1].id], 2);
        assert_eq!(indices[&notes[2].id], 3);
    }

    #[test]
    fn test_hidden_notes_are_skipped() {
        let notes = [note(1, false), note(2, true), note(3, false)];
        let indices = recompute_note_indices(&notes);
        assert_eq!(indices[&notes[0].id], 1);
        assert!(!indices.contains_key(&notes[1].id));
        assert_eq!(indices[&notes[2].id], 2);
    }

    #[test]
    fn test_reveal_restores_original_position() {
        let mut notes = [note(1, false), note(2, true), note(3, false)];
        notes[1].hidden = false;
        let indices = recompute_note_indices(&notes);
        // The revealed note resumes slot 2, not the end of the sequence.
        assert_eq!(indices[&notes[1].id], 2);
        assert_eq!(indices[&notes[2].id], 3);
    }

    #[test]
    fn test_iteration_order_is_irrelevant() {
        let notes = [note(3, false), note(1, false), note(2, true)];
        let indices = recompute_note_indices(&notes);
        assert_eq!(indices[&notes[1].id], 1);
        assert_eq!(indices[&notes[0].id], 2);
    }

    #[test]
    fn test_indices_are_gapless() {
        let notes = [
            note(1, true),
            note(2, false),
            note(5, true),
            note(9, false),
            note(12, false),
        ];
        let indices = recompute_note_indices(&notes);
        let mut values: Vec<u32> = indices.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input() {
        let indices = recompute_note_indices(std::iter::empty::<&NoteElement>());
        assert!(indices.is_empty());
    }
}
