//! Axis-aligned bounds for canvas elements.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle describing an element's position and size.
///
/// Serializes as the compact `[x, y, w, h]` tuple used as the on-the-wire
/// representation of every element's spatial extent. NaN and infinite
/// coordinates are not sanitized here; callers pass finite values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", from = "[f64; 4]")]
pub struct Bound {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (non-negative after normalization).
    pub w: f64,
    /// Height (non-negative after normalization).
    pub h: f64,
}

impl Bound {
    /// Create a bound from its raw components.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Create a bound from two corner points, normalizing the extent.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            w: (p2.x - p1.x).abs(),
            h: (p2.y - p1.y).abs(),
        }
    }

    /// Flip negative extents so that `w >= 0` and `h >= 0`, adjusting the
    /// origin. Zero-extent bounds are legal and stay untouched.
    pub fn normalize(self) -> Self {
        let (x, w) = if self.w < 0.0 {
            (self.x + self.w, -self.w)
        } else {
            (self.x, self.w)
        };
        let (y, h) = if self.h < 0.0 {
            (self.y + self.h, -self.h)
        } else {
            (self.y, self.h)
        };
        Self { x, y, w, h }
    }

    /// Serialize to the ordered `[x, y, w, h]` form.
    pub fn serialize(&self) -> [f64; 4] {
        [self.x, self.y, self.w, self.h]
    }

    /// Exact inverse of [`Bound::serialize`].
    pub fn deserialize(xywh: [f64; 4]) -> Self {
        Self::new(xywh[0], xywh[1], xywh[2], xywh[3])
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bottom-right corner.
    pub fn max_corner(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    /// Whether a point lies inside (boundary inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }

    /// Smallest bound covering both `self` and `other`.
    pub fn union(&self, other: &Bound) -> Bound {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.w).max(other.x + other.w);
        let y1 = (self.y + self.h).max(other.y + other.h);
        Bound::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Whether two bounds overlap (edge touching counts).
    pub fn intersects(&self, other: &Bound) -> bool {
        self.x <= other.x + other.w
            && other.x <= self.x + self.w
            && self.y <= other.y + other.h
            && other.y <= self.y + self.h
    }

    /// View as a kurbo [`Rect`].
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    /// Whether all four components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

impl From<Bound> for [f64; 4] {
    fn from(bound: Bound) -> Self {
        bound.serialize()
    }
}

impl From<[f64; 4]> for Bound {
    fn from(xywh: [f64; 4]) -> Self {
        Bound::deserialize(xywh)
    }
}

impl From<Rect> for Bound {
    fn from(rect: Rect) -> Self {
        Bound::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}
