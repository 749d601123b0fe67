//! Triangle shape geometry.

use kurbo::Point;

use super::{HitTestOptions, ShapeElement, ShapeMethods, render_frame};
use crate::bound::Bound;
use crate::geometry::{line_intersects_polygon, point_in_polygon, point_to_polygon_dist};
use crate::surface::DrawTarget;

/// Geometry and rendering for [`super::ShapeKind::Triangle`].
///
/// Isosceles triangle: apex at the top-center of the bound, base along the
/// bottom edge.
pub struct TriangleMethods;

fn vertices(bound: &Bound) -> [Point; 3] {
    [
        Point::new(bound.x + bound.w / 2.0, bound.y),
        Point::new(bound.x + bound.w, bound.y + bound.h),
        Point::new(bound.x, bound.y + bound.h),
    ]
}

impl ShapeMethods for TriangleMethods {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_hit_test_inside_and_top_corner_miss() {
        let bound = Bound::new(0.0, 0.0, 100.0, 100.0);
        let methods = TriangleMethods;
        let options = HitTestOptions::default();
        assert!(methods.hit_test(Point::new(50.0, 60.0), &bound, &options));
        // Top-left corner of the bound lies outside the triangle.
        assert!(!methods.hit_test(Point::new(5.0, 5.0), &bound, &options));
    }

    #[test]
    fn test_intersect_with_line() {
        let shape = ShapeElement::new(ShapeKind::Triangle, Bound::new(0.0, 0.0, 100.0, 100.0));
        assert!(shape.intersect_with_line(Point::new(-10.0, 80.0), Point::new(110.0, 80.0)));
        // Crosses the bound above the apex slopes.
        assert!(!shape.intersect_with_line(Point::new(-10.0, 5.0), Point::new(5.0, -10.0)));
    }
}
