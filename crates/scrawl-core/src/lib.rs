//! Scrawl Core Library
//!
//! Platform-agnostic element geometry, hit-testing, and note ordering for
//! the Scrawl canvas. The rendering backend, text layout, and editor
//! chrome live in other crates; this one owns the element state and the
//! math those layers call into.

pub mod bound;
pub mod document;
pub mod element;
pub mod geometry;
pub mod note;
pub mod ordering;
pub mod shapes;
pub mod surface;

pub use bound::Bound;
pub use document::{CanvasDocument, DocumentError, RemovedElement};
pub use element::{Element, ElementId};
pub use note::NoteElement;
pub use ordering::recompute_note_indices;
pub use shapes::{
    HitTestOptions, SerializableColor, ShapeElement, ShapeKind, ShapeMethods, ShapeStyle,
    Sloppiness, StrokeStyle,
};
pub use surface::{DrawOptions, DrawTarget};
