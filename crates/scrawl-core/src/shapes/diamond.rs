//! Diamond shape geometry.

use kurbo::Point;

use super::{HitTestOptions, ShapeElement, ShapeMethods, render_frame};
use crate::bound::Bound;
use crate::geometry::{line_intersects_polygon, point_in_polygon, point_to_polygon_dist};
use crate::surface::DrawTarget;

/// Geometry and rendering for [`super::ShapeKind::Diamond`].
///
/// The diamond is the quad spanned by the midpoints of the bound's edges.
pub struct DiamondMethods;

fn vertices(bound: &Bound) -> [Point; 4] {
    let center = bound.center();
    [
        Point::new(center.x, bound.y),
        Point::new(bound.x + bound.w, center.y),
        Point::new(center.x, bound.y + bound.h),
        Point::new(bound.x, center.y),
    ]
}

impl ShapeMethods for DiamondMethods {
    fn render(&self, element: &ShapeElement, target: &mut dyn DrawTarget) {
        let frame = render_frame(&element.xywh, element.style.stroke_width);
        target.polygon(&vertices(&frame), &element.style.draw_options());
    }

    fn hit_test(&self, point: Point, bound: &Bound, options: &HitTestOptions) -> bool {
        // Padding admits points within `expand` of the outline.
        let verts = vertices(bound);
        point_in_polygon(point, &verts)
            || (options.expand > 0.0 && point_to_polygon_dist(point, &verts) <= options.expand)
    }

    fn intersect_with_line(&self, start: Point, end: Point, element: &ShapeElement) -> bool {
        line_intersects_polygon(start, end, &vertices(&element.xywh))
    }
}
