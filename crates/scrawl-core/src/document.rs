//! Canvas document: element registry, note ordering, and undo history.

use std::collections::HashMap;

use kurbo::Point;
use log::{debug, warn};
use thiserror::Error;

use crate::bound::Bound;
use crate::element::{Element, ElementId};
use crate::note::NoteElement;
use crate::ordering::recompute_note_indices;
use crate::shapes::{HitTestOptions, SerializableColor, ShapeElement};

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Rejected document operations.
///
/// A rejected operation leaves the document unchanged; callers can treat
/// these as precondition violations rather than recoverable conditions.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("element {0} already exists")]
    DuplicateId(ElementId),
    #[error("unknown element {0}")]
    UnknownElement(ElementId),
    #[error("element {0} is not a note")]
    NotANote(ElementId),
    #[error("note creation order {0} is already in use")]
    DuplicateOrder(u64),
    #[error("bound [{0}, {1}, {2}, {3}] has non-finite coordinates")]
    NonFiniteBound(f64, f64, f64, f64),
}

/// A snapshot of document state for undo/redo.
///
/// The note counter is deliberately absent: creation-order values are
/// never reused, even across undo branches.
#[derive(Debug, Clone)]
struct DocumentSnapshot {
    elements: HashMap<ElementId, Element>,
    z_order: Vec<ElementId>,
}

/// Outcome of a committed element removal.
#[derive(Debug)]
pub struct RemovedElement {
    /// The element that was taken out of the document.
    pub element: Element,
    /// Id of the fresh empty note substituted when the removed note was
    /// the last one.
    pub replacement: Option<ElementId>,
}

/// A canvas document owning all placed elements.
///
/// The document is the single owner of element state: structural mutations
/// (add, remove, hide/reveal, move/resize, undo, redo) go through its
/// methods and each ends with the note display indices recomputed, so a
/// committed mutation is never observable with stale numbering.
#[derive(Debug, Clone)]
pub struct CanvasDocument {
    /// All elements, keyed by id.
    elements: HashMap<ElementId, Element>,
    /// Z-order of elements (back to front).
    z_order: Vec<ElementId>,
    /// Monotonic note creation counter. Only ever increases; undo does not
    /// roll it back.
    note_counter: u64,
    /// Derived display indices for visible notes.
    note_indices: HashMap<ElementId, u32>,
    /// Undo history stack.
    undo_stack: Vec<DocumentSnapshot>,
    /// Redo history stack.
    redo_stack: Vec<DocumentSnapshot>,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create a document seeded with one empty note. The canvas never has
    /// zero notes.
    pub fn new() -> Self {
        let mut doc = Self {
            elements: HashMap::new(),
            z_order: Vec::new(),
            note_counter: 0,
            note_indices: HashMap::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        };
        doc.add_note();
        doc
    }

    fn next_note_order(&mut self) -> u64 {
        self.note_counter += 1;
        self.note_counter
    }

    fn ensure_finite(bound: &Bound) -> Result<(), DocumentError> {
        if bound.is_finite() {
            Ok(())
        } else {
            warn!("rejecting non-finite bound {bound:?}");
            Err(DocumentError::NonFiniteBound(
                bound.x, bound.y, bound.w, bound.h,
            ))
        }
    }

    /// Recompute display indices from current membership + hidden flags.
    ///
    /// Idempotent and safe to call at any time; also invoked internally at
    /// the end of every structural mutation.
    pub fn recompute(&mut self) {
        self.note_indices =
            recompute_note_indices(self.elements.values().filter_map(Element::as_note));
        debug!(
            "display indices recomputed: {} visible of {} notes",
            self.note_indices.len(),
            self.note_count()
        );
    }

    /// Add a note with the default frame. Returns its id.
    pub fn add_note(&mut self) -> ElementId {
        let note = NoteElement::new(self.next_note_order());
        let id = note.id;
        debug!("add note {id} (order {})", note.created_order);
        self.elements.insert(id, Element::Note(note));
        self.z_order.push(id);
        self.recompute();
        id
    }

    /// Add a note with an explicit frame.
    pub fn add_note_at(&mut self, bound: Bound) -> Result<ElementId, DocumentError> {
        Self::ensure_finite(&bound)?;
        let note = NoteElement::with_bound(bound, self.next_note_order());
        let id = note.id;
        debug!("add note {id} (order {})", note.created_order);
        self.elements.insert(id, Element::Note(note));
        self.z_order.push(id);
        self.recompute();
        Ok(id)
    }

    /// Add a shape element.
    pub fn add_shape(&mut self, shape: ShapeElement) -> Result<ElementId, DocumentError> {
        self.insert_element(Element::Shape(shape))
    }

    /// Insert a pre-built element (e.g. re-inserting a removed one).
    ///
    /// Duplicate ids and duplicate note creation orders are rejected; a
    /// re-inserted note keeps its original `created_order`, so it resumes
    /// its old place in the numbering.
    pub fn insert_element(&mut self, element: Element) -> Result<ElementId, DocumentError> {
        Self::ensure_finite(&element.bound())?;
        let id = element.id();
        if self.elements.contains_key(&id) {
            warn!("rejecting insert of duplicate element {id}");
            return Err(DocumentError::DuplicateId(id));
        }
        if let Some(note) = element.as_note() {
            let order = note.created_order;
            if self
                .elements
                .values()
                .filter_map(Element::as_note)
                .any(|n| n.created_order == order)
            {
                warn!("rejecting insert of note {id} with duplicate order {order}");
                return Err(DocumentError::DuplicateOrder(order));
            }
            // Keep the counter ahead of every live order value.
            self.note_counter = self.note_counter.max(order);
        }
        let is_note = element.is_note();
        self.elements.insert(id, element);
        self.z_order.push(id);
        if is_note {
            self.recompute();
        }
        Ok(id)
    }

    /// Remove an element.
    ///
    /// Removing the last remaining note (hidden notes included in the
    /// count) substitutes a fresh empty note in the same step, so the
    /// document never holds zero notes. The substitution is reported via
    /// [`RemovedElement::replacement`].
    pub fn remove_element(&mut self, id: ElementId) -> Result<RemovedElement, DocumentError> {
        let element = self
            .elements
            .remove(&id)
            .ok_or(DocumentError::UnknownElement(id))?;
        self.z_order.retain(|&eid| eid != id);

        let mut replacement = None;
        if element.is_note() {
            if self.note_count() == 0 {
                let fresh = NoteElement::new(self.next_note_order());
                let fresh_id = fresh.id;
                debug!("substituting fresh note {fresh_id} for last note {id}");
                self.elements.insert(fresh_id, Element::Note(fresh));
                self.z_order.push(fresh_id);
                replacement = Some(fresh_id);
            }
            self.recompute();
        }
        debug!("removed element {id}");
        Ok(RemovedElement {
            element,
            replacement,
        })
    }

    /// Hide or reveal a note. Hidden notes keep their `created_order`, so
    /// revealing restores the original numbering position.
    pub fn set_note_hidden(&mut self, id: ElementId, hidden: bool) -> Result<(), DocumentError> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(DocumentError::UnknownElement(id))?;
        let note = element.as_note_mut().ok_or(DocumentError::NotANote(id))?;
        note.hidden = hidden;
        debug!("note {id} hidden = {hidden}");
        self.recompute();
        Ok(())
    }

    /// Hide a note.
    pub fn hide_note(&mut self, id: ElementId) -> Result<(), DocumentError> {
        self.set_note_hidden(id, true)
    }

    /// Reveal a hidden note.
    pub fn reveal_note(&mut self, id: ElementId) -> Result<(), DocumentError> {
        self.set_note_hidden(id, false)
    }

    /// Change a note's background color.
    pub fn set_note_background(
        &mut self,
        id: ElementId,
        background: SerializableColor,
    ) -> Result<(), DocumentError> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(DocumentError::UnknownElement(id))?;
        let note = element.as_note_mut().ok_or(DocumentError::NotANote(id))?;
        note.background = background;
        Ok(())
    }

    /// Move or resize an element in place. Touches neither `created_order`
    /// nor the display indices.
    pub fn move_resize(&mut self, id: ElementId, bound: Bound) -> Result<(), DocumentError> {
        Self::ensure_finite(&bound)?;
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(DocumentError::UnknownElement(id))?;
        element.set_bound(bound.normalize());
        Ok(())
    }

    /// The 1-based display index of a visible note; `None` for hidden
    /// notes, shapes, and unknown ids.
    pub fn display_index(&self, id: ElementId) -> Option<u32> {
        self.note_indices.get(&id).copied()
    }

    /// Get an element by id.
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable shape by id. Note state is mutated through document
    /// methods so the derived numbering can never go stale.
    pub fn get_shape_mut(&mut self, id: ElementId) -> Option<&mut ShapeElement> {
        match self.elements.get_mut(&id) {
            Some(Element::Shape(shape)) => Some(shape),
            _ => None,
        }
    }

    /// Elements in z-order (back to front), hidden notes included.
    pub fn elements_ordered(&self) -> impl Iterator<Item = &Element> {
        self.z_order.iter().filter_map(|id| self.elements.get(id))
    }

    /// All notes, in arbitrary order.
    pub fn notes(&self) -> impl Iterator<Item = &NoteElement> {
        self.elements.values().filter_map(Element::as_note)
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document holds no elements. Never true in practice: the
    /// note floor keeps at least one note alive.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total note count, hidden ones included.
    pub fn note_count(&self) -> usize {
        self.elements.values().filter(|e| e.is_note()).count()
    }

    /// Count of notes currently assigned a display index.
    pub fn visible_note_count(&self) -> usize {
        self.note_indices.len()
    }

    /// Find all elements under a point, front to back. Hidden notes are
    /// not hit-testable.
    pub fn elements_at_point(&self, point: Point, options: &HitTestOptions) -> Vec<ElementId> {
        self.z_order
            .iter()
            .rev()
            .filter_map(|&id| {
                self.elements
                    .get(&id)
                    .filter(|e| !e.is_hidden() && e.hit_test(point, options))
                    .map(|_| id)
            })
            .collect()
    }

    /// The topmost element under a point, if any.
    pub fn hit_test_at(&self, point: Point, options: &HitTestOptions) -> Option<ElementId> {
        self.z_order.iter().rev().find(|&&id| {
            self.elements
                .get(&id)
                .is_some_and(|e| !e.is_hidden() && e.hit_test(point, options))
        }).copied()
    }

    /// Union bound of all visible elements.
    pub fn bounds(&self) -> Option<Bound> {
        let mut result: Option<Bound> = None;
        for element in self.elements.values() {
            if element.is_hidden() {
                continue;
            }
            let bound = element.bound();
            result = Some(match result {
                Some(acc) => acc.union(&bound),
                None => bound,
            });
        }
        result
    }

    /// Bring an element to the front (topmost).
    pub fn bring_to_front(&mut self, id: ElementId) {
        self.z_order.retain(|&eid| eid != id);
        self.z_order.push(id);
    }

    /// Send an element to the back (bottommost).
    pub fn send_to_back(&mut self, id: ElementId) {
        self.z_order.retain(|&eid| eid != id);
        self.z_order.insert(0, id);
    }

    /// Move an element one layer forward. Returns false if already at the
    /// front.
    pub fn bring_forward(&mut self, id: ElementId) -> bool {
        if let Some(pos) = self.z_order.iter().position(|&eid| eid == id) {
            if pos < self.z_order.len() - 1 {
                self.z_order.swap(pos, pos + 1);
                return true;
            }
        }
        false
    }

    /// Move an element one layer backward. Returns false if already at the
    /// back.
    pub fn send_backward(&mut self, id: ElementId) -> bool {
        if let Some(pos) = self.z_order.iter().position(|&eid| eid == id) {
            if pos > 0 {
                self.z_order.swap(pos, pos - 1);
                return true;
            }
        }
        false
    }

    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            elements: self.elements.clone(),
            z_order: self.z_order.clone(),
        }
    }

    /// Push current state to the undo stack (call before making changes).
    pub fn push_undo(&mut self) {
        let snapshot = self.snapshot();
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns false if nothing to undo.
    ///
    /// Restores membership and z-order, then recomputes the display
    /// indices from the restored state; the note counter keeps its value.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.undo_stack.pop() {
            let current = self.snapshot();
            self.redo_stack.push(current);
            self.elements = snapshot.elements;
            self.z_order = snapshot.z_order;
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Redo the last undone change. Returns false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.redo_stack.pop() {
            let current = self.snapshot();
            self.undo_stack.push(current);
            self.elements = snapshot.elements;
            self.z_order = snapshot.z_order;
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
