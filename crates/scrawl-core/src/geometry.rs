//! Stateless geometric primitives shared by shape hit-testing.
//!
//! All functions here are total: degenerate inputs (zero radii, zero-length
//! segments, zero-area rectangles) take defined fallback paths and never
//! panic or divide by zero.

use kurbo::{Point, Rect, Vec2};

/// Membership test against an axis-aligned ellipse.
///
/// A zero radius collapses that axis to a line; membership then requires
/// exact equality on the collapsed axis.
pub fn point_in_ellipse(point: Point, center: Point, radius_x: f64, radius_y: f64) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    if radius_x == 0.0 && radius_y == 0.0 {
        return dx == 0.0 && dy == 0.0;
    }
    if radius_x == 0.0 {
        return dx == 0.0 && dy.abs() <= radius_y;
    }
    if radius_y == 0.0 {
        return dy == 0.0 && dx.abs() <= radius_x;
    }
    let nx = dx / radius_x;
    let ny = dy / radius_y;
    nx * nx + ny * ny <= 1.0
}

/// Whether the segment `p1..p2` crosses the boundary of an axis-aligned
/// ellipse.
///
/// Solves the quadratic obtained by substituting `p1 + t * (p2 - p1)` into
/// the ellipse equation; intersects iff a real root has `t` in `[0, 1]`.
/// A zero-length segment degenerates to [`point_in_ellipse`]; a zero radius
/// collapses the ellipse to a segment and the test becomes segment/segment.
pub fn line_ellipse_intersects(
    p1: Point,
    p2: Point,
    center: Point,
    radius_x: f64,
    radius_y: f64,
) -> bool {
    if p1 == p2 {
        return point_in_ellipse(p1, center, radius_x, radius_y);
    }
    if radius_x == 0.0 || radius_y == 0.0 {
        let a = Point::new(center.x - radius_x, center.y - radius_y);
        let b = Point::new(center.x + radius_x, center.y + radius_y);
        return segments_intersect(p1, p2, a, b);
    }
    // Normalize so the ellipse becomes the unit circle.
    let ox = (p1.x - center.x) / radius_x;
    let oy = (p1.y - center.y) / radius_y;
    let dx = (p2.x - p1.x) / radius_x;
    let dy = (p2.y - p1.y) / radius_y;
    let a = dx * dx + dy * dy;
    let b = 2.0 * (ox * dx + oy * dy);
    let c = ox * ox + oy * oy - 1.0;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return false;
    }
    let sqrt_disc = disc.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// Test if two line segments (a-b) and (c-d) intersect.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let cross = |o: Point, p: Point, q: Point| -> f64 {
        (p.x - o.x) * (q.y - o.y) - (p.y - o.y) * (q.x - o.x)
    };
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    // Collinear cases: check if an endpoint lies on the other segment
    let on_segment = |p: Point, q: Point, r: Point| -> bool {
        r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
    };
    (d1.abs() < 1e-10 && on_segment(c, d, a))
        || (d2.abs() < 1e-10 && on_segment(c, d, b))
        || (d3.abs() < 1e-10 && on_segment(a, b, c))
        || (d4.abs() < 1e-10 && on_segment(a, b, d))
}

/// Whether the segment `p1..p2` touches an axis-aligned rectangle: either
/// an endpoint is inside or the segment crosses one of the four edges.
pub fn line_intersects_rect(p1: Point, p2: Point, rect: Rect) -> bool {
    if rect.contains(p1) || rect.contains(p2) {
        return true;
    }
    let corners = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ];
    let edges = [
        (corners[0], corners[1]),
        (corners[1], corners[2]),
        (corners[2], corners[3]),
        (corners[3], corners[0]),
    ];
    edges
        .iter()
        .any(|&(a, b)| segments_intersect(p1, p2, a, b))
}

/// Even-odd membership test against a simple polygon.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > point.y) != (vj.y > point.y) {
            let t = (point.y - vi.y) / (vj.y - vi.y);
            if point.x < vi.x + t * (vj.x - vi.x) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether the segment `p1..p2` touches a simple polygon: either an
/// endpoint is inside or the segment crosses one of the (closed) edges.
pub fn line_intersects_polygon(p1: Point, p2: Point, vertices: &[Point]) -> bool {
    if point_in_polygon(p1, vertices) || point_in_polygon(p2, vertices) {
        return true;
    }
    let n = vertices.len();
    if n < 2 {
        return false;
    }
    (0..n).any(|i| segments_intersect(p1, p2, vertices[i], vertices[(i + 1) % n]))
}

/// Distance from a point to a line segment (a->b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a closed polygon outline.
pub fn point_to_polygon_dist(point: Point, vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n == 0 {
        return f64::INFINITY;
    }
    (0..n)
        .map(|i| point_to_segment_dist(point, vertices[i], vertices[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}
