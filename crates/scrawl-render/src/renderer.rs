//! Document renderer producing a display list.

use log::debug;
use scrawl_core::{CanvasDocument, DrawOptions, DrawTarget, Element, NoteElement, SerializableColor};

use crate::scene::{Scene, SceneSurface};

/// Hairline frame drawn around note backgrounds.
const NOTE_FRAME_WIDTH: f64 = 1.0;

/// Build the display list for a document.
///
/// Elements are walked in z-order (back to front); hidden notes are
/// skipped entirely. Notes draw their background frame, shapes draw
/// through their kind's render contract.
pub fn render_document(document: &CanvasDocument, scene: &mut Scene) {
    let mut drawn = 0usize;
    for element in document.elements_ordered() {
        if element.is_hidden() {
            continue;
        }
        match element {
            Element::Note(note) => render_note(note, scene),
            Element::Shape(shape) => {
                let mut surface = SceneSurface::new(scene);
                shape.render(&mut surface);
            }
        }
        drawn += 1;
    }
    debug!("scene built: {drawn} elements, {} display items", scene.len());
}

fn render_note(note: &NoteElement, scene: &mut Scene) {
    let options = DrawOptions {
        seed: 0,
        roughness: 0.0,
        stroke: SerializableColor::new(0, 0, 0, 40),
        stroke_width: NOTE_FRAME_WIDTH,
        dash: None,
        fill: Some(note.background),
    };
    let mut surface = SceneSurface::new(scene);
    surface.rect(note.xywh.origin(), note.xywh.w, note.xywh.h, &options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DisplayItem;
    use kurbo::Shape as KurboShape;
    use scrawl_core::{Bound, ShapeElement, ShapeKind, Sloppiness, StrokeStyle};

    fn scene_for(document: &CanvasDocument) -> Scene {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut scene = Scene::new();
        render_document(document, &mut scene);
        scene
    }

    #[test]
    fn test_note_renders_fill_and_frame() {
        let doc = CanvasDocument::new();
        let scene = scene_for(&doc);
        assert_eq!(scene.len(), 2);
        assert!(matches!(scene.items()[0], DisplayItem::Fill { .. }));
        assert!(matches!(scene.items()[1], DisplayItem::Stroke { .. }));
    }

    #[test]
    fn test_hidden_note_is_skipped() {
        let mut doc = CanvasDocument::new();
        let note = doc.notes().next().map(|n| n.id()).unwrap();
        doc.hide_note(note).unwrap();
        let scene = scene_for(&doc);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_ellipse_stroke_inset_by_half_stroke_width() {
        let mut doc = CanvasDocument::new();
        let mut shape = ShapeElement::new(ShapeKind::Ellipse, Bound::new(0.0, 0.0, 100.0, 50.0));
        shape.style.stroke_width = 10.0;
        shape.style.sloppiness = Sloppiness::Architect;
        doc.add_shape(shape).unwrap();

        let scene = scene_for(&doc);
        // Note fill + note frame + shape stroke.
        let DisplayItem::Stroke { path, width, .. } = &scene.items()[2] else {
            panic!("expected the ellipse stroke");
        };
        assert_eq!(*width, 10.0);
        // Drawn from extents (90, 40): inset by 5 on each side.
        let bbox = path.bounding_box();
        assert!((bbox.x0 - 5.0).abs() < 0.5);
        assert!((bbox.y0 - 5.0).abs() < 0.5);
        assert!((bbox.x1 - 95.0).abs() < 0.5);
        assert!((bbox.y1 - 45.0).abs() < 0.5);
    }

    #[test]
    fn test_dashed_shape_carries_dash_pattern() {
        let mut doc = CanvasDocument::new();
        let mut shape = ShapeElement::new(ShapeKind::Rectangle, Bound::new(0.0, 0.0, 50.0, 50.0));
        shape.style.stroke_style = StrokeStyle::Dashed;
        shape.style.sloppiness = Sloppiness::Architect;
        doc.add_shape(shape).unwrap();

        let scene = scene_for(&doc);
        let DisplayItem::Stroke { dash, .. } = &scene.items()[2] else {
            panic!("expected the rectangle stroke");
        };
        assert_eq!(*dash, Some([12.0, 12.0]));
    }

    #[test]
    fn test_elements_render_in_z_order() {
        let mut doc = CanvasDocument::new();
        let mut shape = ShapeElement::new(ShapeKind::Triangle, Bound::new(0.0, 0.0, 50.0, 50.0));
        shape.style.sloppiness = Sloppiness::Architect;
        let id = doc.add_shape(shape).unwrap();
        doc.send_to_back(id);

        let scene = scene_for(&doc);
        // The shape now draws before the note background.
        assert_eq!(scene.len(), 3);
        assert!(matches!(scene.items()[0], DisplayItem::Stroke { .. }));
        assert!(matches!(scene.items()[1], DisplayItem::Fill { .. }));
    }
}
