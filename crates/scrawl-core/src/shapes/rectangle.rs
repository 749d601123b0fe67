//! Rectangle shape geometry.

use kurbo::Point;

use super::{HitTestOptions, ShapeElement, ShapeMethods, render_frame};
use crate::bound::Bound;
use crate::geometry::line_intersects_rect;
use crate::surface::DrawTarget;

/// Geometry and rendering for [`super::ShapeKind::Rectangle`].
pub struct RectangleMethods;

impl ShapeMethods for RectangleMethods {
    fn render(&self, element: &ShapeElement, target: &mut dyn DrawTarget) {
        let frame = render_frame(&element.xywh, element.style.stroke_width);
        target.rect(
            frame.origin(),
            frame.w,
            frame.h,
            &element.style.draw_options(),
        );
    }

    fn hit_test(&self, point: Point, bound: &Bound, options: &HitTestOptions) -> bool {
        // Padding inflates the rectangle on all sides. Bound::contains is
        // boundary-inclusive, so degenerate zero-measure bounds stay
        // hit-testable on their line.
        let e = options.expand;
        Bound::new(
            bound.x - e,
            bound.y - e,
            bound.w + 2.0 * e,
            bound.h + 2.0 * e,
        )
        .contains(point)
    }

    fn intersect_with_line(&self, start: Point, end: Point, element: &ShapeElement) -> bool {
        line_intersects_rect(start, end, element.xywh.as_rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_hit_test() {
        let bound = Bound::new(0.0, 0.0, 100.0, 100.0);
        let methods = RectangleMethods;
        let options = HitTestOptions::default();
        assert!(methods.hit_test(Point::new(50.0, 50.0), &bound, &options));
        assert!(!methods.hit_test(Point::new(150.0, 50.0), &bound, &options));
        // Within padding.
        assert!(methods.hit_test(
            Point::new(105.0, 50.0),
            &bound,
            &HitTestOptions { expand: 10.0 }
        ));
    }

    #[test]
    fn test_hit_test_zero_height_bound() {
        let bound = Bound::new(0.0, 10.0, 100.0, 0.0);
        let methods = RectangleMethods;
        assert!(methods.hit_test(Point::new(50.0, 10.0), &bound, &HitTestOptions::default()));
        assert!(!methods.hit_test(Point::new(50.0, 11.0), &bound, &HitTestOptions::default()));
    }

    #[test]
    fn test_intersect_with_line() {
        let shape = ShapeElement::new(ShapeKind::Rectangle, Bound::new(0.0, 0.0, 100.0, 50.0));
        assert!(shape.intersect_with_line(Point::new(-10.0, 25.0), Point::new(110.0, 25.0)));
        assert!(!shape.intersect_with_line(Point::new(-10.0, 60.0), Point::new(110.0, 60.0)));
    }
}
