//! The element sum type stored by the document.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bound::Bound;
use crate::note::NoteElement;
use crate::shapes::{HitTestOptions, ShapeElement};

/// Unique identifier for canvas elements. Assigned once, never reused.
pub type ElementId = Uuid;

/// Any element placed on the canvas: a freeform shape or a note container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Shape(ShapeElement),
    Note(NoteElement),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Shape(s) => s.id,
            Element::Note(n) => n.id,
        }
    }

    /// Current spatial extent.
    pub fn bound(&self) -> Bound {
        match self {
            Element::Shape(s) => s.xywh,
            Element::Note(n) => n.xywh,
        }
    }

    /// Replace the spatial extent (move/resize).
    pub fn set_bound(&mut self, bound: Bound) {
        match self {
            Element::Shape(s) => s.xywh = bound,
            Element::Note(n) => n.xywh = bound,
        }
    }

    /// Point containment via the element's own geometry.
    pub fn hit_test(&self, point: Point, options: &HitTestOptions) -> bool {
        match self {
            Element::Shape(s) => s.hit_test(point, options),
            Element::Note(n) => n.hit_test(point, options.expand),
        }
    }

    /// Whether this element is excluded from rendering and numbering.
    /// Shapes are never hidden.
    pub fn is_hidden(&self) -> bool {
        match self {
            Element::Shape(_) => false,
            Element::Note(n) => n.hidden,
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Element::Note(_))
    }

    pub fn as_note(&self) -> Option<&NoteElement> {
        match self {
            Element::Note(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_note_mut(&mut self) -> Option<&mut NoteElement> {
        match self {
            Element::Note(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeElement> {
        match self {
            Element::Shape(s) => Some(s),
            _ => None,
        }
    }
}
