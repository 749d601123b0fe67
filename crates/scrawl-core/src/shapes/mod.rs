//! Shape elements and the per-kind geometry contract.

mod diamond;
mod ellipse;
mod rectangle;
mod triangle;

pub use diamond::DiamondMethods;
pub use ellipse::EllipseMethods;
pub use rectangle::RectangleMethods;
pub use triangle::TriangleMethods;

use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bound::Bound;
use crate::element::ElementId;
use crate::surface::{DrawOptions, DrawTarget};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke style for shape outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl StrokeStyle {
    /// Dash pattern for this style (on/off lengths in canvas units).
    pub fn dash_pattern(self) -> Option<[f64; 2]> {
        match self {
            StrokeStyle::Solid => None,
            StrokeStyle::Dashed => Some([12.0, 12.0]),
        }
    }
}

/// Sloppiness level for the hand-drawn effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sloppiness {
    /// No roughness, clean precise outlines.
    Architect,
    /// Slight hand-drawn feel.
    #[default]
    Artist,
    /// Very sketchy.
    Cartoonist,
}

impl Sloppiness {
    /// Get the roughness factor for this sloppiness level.
    pub fn roughness(&self) -> f64 {
        match self {
            Sloppiness::Architect => 0.0,
            Sloppiness::Artist => 1.0,
            Sloppiness::Cartoonist => 2.0,
        }
    }
}

/// Generate a random seed for new shapes.
/// Uses a counter + hash approach so it works without a time source.
fn generate_seed() -> u32 {
    use std::sync::atomic::{AtomicU32, Ordering};

    static SEED_COUNTER: AtomicU32 = AtomicU32::new(1);

    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    // splitmix32-style mixing for better distribution
    let mut x = counter.wrapping_mul(0x9E3779B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^= x >> 16;
    x
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Solid or dashed outline.
    #[serde(default)]
    pub stroke_style: StrokeStyle,
    /// Fill color (`None` = outline only).
    pub fill_color: Option<SerializableColor>,
    /// Sloppiness level for the hand-drawn effect.
    pub sloppiness: Sloppiness,
    /// Random seed for the hand-drawn effect (stable across transforms).
    #[serde(default = "generate_seed")]
    pub seed: u32,
}

impl ShapeStyle {
    /// Whether the shape is filled.
    pub fn filled(&self) -> bool {
        self.fill_color.is_some()
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }

    /// Draw options carrying this style's seed, roughness, and dash
    /// pattern.
    pub fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            seed: self.seed,
            roughness: self.sloppiness.roughness(),
            stroke: self.stroke_color,
            stroke_width: self.stroke_width,
            dash: self.stroke_style.dash_pattern(),
            fill: self.fill_color,
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            stroke_style: StrokeStyle::default(),
            fill_color: None,
            sloppiness: Sloppiness::default(),
            seed: generate_seed(),
        }
    }
}

/// The shape kinds the canvas supports.
///
/// Adding a kind means adding one variant here plus one [`ShapeMethods`]
/// implementation; the document and renderer are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Ellipse,
    Rectangle,
    Diamond,
    Triangle,
}

impl ShapeKind {
    /// The geometry/render implementation for this kind.
    pub fn methods(self) -> &'static dyn ShapeMethods {
        match self {
            ShapeKind::Ellipse => &EllipseMethods,
            ShapeKind::Rectangle => &RectangleMethods,
            ShapeKind::Diamond => &DiamondMethods,
            ShapeKind::Triangle => &TriangleMethods,
        }
    }
}

/// Options for point hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitTestOptions {
    /// Extra padding around the shape, e.g. for touch input. Each kind
    /// documents how the padding is applied.
    pub expand: f64,
}

/// The capability set every shape kind implements.
pub trait ShapeMethods: Sync {
    /// Emit this shape's draw primitives onto `target`. The drawn outline
    /// is inset by half the stroke width per side so the stroke stays
    /// within the nominal bound.
    fn render(&self, element: &ShapeElement, target: &mut dyn DrawTarget);

    /// Point containment test against `bound`.
    fn hit_test(&self, point: Point, bound: &Bound, options: &HitTestOptions) -> bool;

    /// Segment intersection test. The bound is derived fresh from
    /// `element.xywh` on every call, never cached.
    fn intersect_with_line(&self, start: Point, end: Point, element: &ShapeElement) -> bool;
}

/// A placed shape element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    pub(crate) id: ElementId,
    /// Shape kind, driving geometry and rendering.
    pub kind: ShapeKind,
    /// Spatial extent, serialized as `[x, y, w, h]`.
    pub xywh: Bound,
    /// Style properties.
    pub style: ShapeStyle,
}

impl ShapeElement {
    /// Create a new shape with a generated id and default style.
    pub fn new(kind: ShapeKind, xywh: Bound) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            xywh: xywh.normalize(),
            style: ShapeStyle::default(),
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Emit draw primitives onto a target surface.
    pub fn render(&self, target: &mut dyn DrawTarget) {
        self.kind.methods().render(self, target);
    }

    /// Check if a point hits this shape.
    pub fn hit_test(&self, point: Point, options: &HitTestOptions) -> bool {
        self.kind.methods().hit_test(point, &self.xywh, options)
    }

    /// Check if a segment touches this shape.
    pub fn intersect_with_line(&self, start: Point, end: Point) -> bool {
        self.kind.methods().intersect_with_line(start, end, self)
    }
}

/// Inset a bound by half the stroke width per side, with a minimum drawn
/// extent of 1 per axis so zero-area draws cannot occur.
pub(crate) fn render_frame(bound: &Bound, stroke_width: f64) -> Bound {
    let offset = stroke_width.max(0.0) / 2.0;
    Bound {
        x: bound.x + offset,
        y: bound.y + offset,
        w: (bound.w - offset * 2.0).max(1.0),
        h: (bound.h - offset * 2.0).max(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_inset() {
        let frame = render_frame(&Bound::new(0.0, 0.0, 100.0, 50.0), 10.0);
        assert_eq!(frame, Bound::new(5.0, 5.0, 90.0, 40.0));
    }

    #[test]
    fn test_render_frame_minimum_extent() {
        let frame = render_frame(&Bound::new(0.0, 0.0, 4.0, 0.0), 10.0);
        assert_eq!(frame.w, 1.0);
        assert_eq!(frame.h, 1.0);
    }

    #[test]
    fn test_render_frame_negative_stroke_width() {
        let bound = Bound::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(render_frame(&bound, -3.0), bound);
    }

    #[test]
    fn test_dash_pattern() {
        assert_eq!(StrokeStyle::Dashed.dash_pattern(), Some([12.0, 12.0]));
        assert_eq!(StrokeStyle::Solid.dash_pattern(), None);
    }

    #[test]
    fn test_seed_is_unique_per_style() {
        let a = ShapeStyle::default();
        let b = ShapeStyle::default();
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn test_shape_normalizes_bound() {
        let shape = ShapeElement::new(ShapeKind::Rectangle, Bound::new(10.0, 10.0, -10.0, 20.0));
        assert_eq!(shape.xywh, Bound::new(0.0, 10.0, 10.0, 20.0));
    }
}
