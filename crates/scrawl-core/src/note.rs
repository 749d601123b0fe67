//! Note containers: flowing text frames placed on the canvas.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bound::Bound;
use crate::element::ElementId;
use crate::shapes::SerializableColor;

/// Default note frame width.
pub const DEFAULT_NOTE_WIDTH: f64 = 448.0;
/// Default note frame height.
pub const DEFAULT_NOTE_HEIGHT: f64 = 80.0;

/// A note container element.
///
/// Notes carry text content managed outside this crate; the core tracks
/// their frame, background, visibility, and creation order. `created_order`
/// is assigned once from the document's monotonic counter and never
/// reassigned — the user-facing display index is derived from it by the
/// ordering engine and lives in the document, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteElement {
    pub(crate) id: ElementId,
    /// Spatial extent, serialized as `[x, y, w, h]`.
    pub xywh: Bound,
    /// Background color token.
    pub background: SerializableColor,
    /// Hidden notes are excluded from rendering, hit-testing, and display
    /// numbering without being deleted.
    pub hidden: bool,
    pub(crate) created_order: u64,
}

impl NoteElement {
    /// Create a note with the default frame.
    pub(crate) fn new(created_order: u64) -> Self {
        Self::with_bound(
            Bound::new(0.0, 0.0, DEFAULT_NOTE_WIDTH, DEFAULT_NOTE_HEIGHT),
            created_order,
        )
    }

    /// Create a note with an explicit frame.
    pub(crate) fn with_bound(xywh: Bound, created_order: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            xywh: xywh.normalize(),
            background: SerializableColor::white(),
            hidden: false,
            created_order,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Monotonic creation-sequence number (not the display index).
    pub fn created_order(&self) -> u64 {
        self.created_order
    }

    /// Point containment against the note frame (boundary inclusive).
    pub fn hit_test(&self, point: Point, expand: f64) -> bool {
        Bound::new(
            self.xywh.x - expand,
            self.xywh.y - expand,
            self.xywh.w + 2.0 * expand,
            self.xywh.h + 2.0 * expand,
        )
        .contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame() {
        let note = NoteElement::new(1);
        assert_eq!(note.xywh.serialize(), [0.0, 0.0, 448.0, 80.0]);
        assert!(!note.hidden);
        assert_eq!(note.created_order(), 1);
    }

    #[test]
    fn test_hit_test() {
        let note = NoteElement::with_bound(Bound::new(10.0, 10.0, 100.0, 80.0), 1);
        assert!(note.hit_test(Point::new(50.0, 50.0), 0.0));
        assert!(!note.hit_test(Point::new(115.0, 50.0), 0.0));
        assert!(note.hit_test(Point::new(115.0, 50.0), 6.0));
    }

    #[test]
    fn test_bound_normalized_on_creation() {
        let note = NoteElement::with_bound(Bound::new(100.0, 100.0, -50.0, 80.0), 1);
        assert_eq!(note.xywh, Bound::new(50.0, 100.0, 50.0, 80.0));
    }
}
