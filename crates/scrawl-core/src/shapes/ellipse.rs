//! Ellipse shape geometry.

use kurbo::Point;

use super::{HitTestOptions, ShapeElement, ShapeMethods, render_frame};
use crate::bound::Bound;
use crate::geometry::{line_ellipse_intersects, point_in_ellipse};
use crate::surface::DrawTarget;

/// Geometry and rendering for [`super::ShapeKind::Ellipse`].
pub struct EllipseMethods;

impl ShapeMethods for EllipseMethods {
    fn render(&self, element: &ShapeElement, target: &mut dyn DrawTarget) {
        let frame = render_frame(&element.xywh, element.style.stroke_width);
        target.ellipse(
            frame.center(),
            frame.w,
            frame.h,
            &element.style.draw_options(),
        );
    }

    fn hit_test(&self, point: Point, bound: &Bound, options: &HitTestOptions) -> bool {
        // Padding inflates both radii; with no padding a degenerate radius
        // stays degenerate.
        point_in_ellipse(
            point,
            bound.center(),
            bound.w / 2.0 + options.expand,
            bound.h / 2.0 + options.expand,
        )
    }

    fn intersect_with_line(&self, start: Point, end: Point, element: &ShapeElement) -> bool {
        let bound = element.xywh;
        line_ellipse_intersects(start, end, bound.center(), bound.w / 2.0, bound.h / 2.0)
    }
}
