//! Draw-target seam between shape geometry and a rendering backend.
//!
//! Shapes never talk to a concrete backend; they emit primitives through
//! [`DrawTarget`]. The in-tree consumer is `scrawl-render`'s display list,
//! but any surface (GPU scene, SVG writer, test recorder) can implement
//! this trait.

use kurbo::Point;

use crate::shapes::SerializableColor;

/// Options for a single draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOptions {
    /// Seed for the hand-drawn jitter, stable per element.
    pub seed: u32,
    /// Roughness factor; 0 means clean strokes.
    pub roughness: f64,
    /// Stroke color.
    pub stroke: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Dash pattern (on/off lengths), `None` for solid strokes.
    pub dash: Option<[f64; 2]>,
    /// Fill color, `None` for outline-only shapes.
    pub fill: Option<SerializableColor>,
}

/// A surface shapes draw onto.
///
/// Implementations read the options and the geometry; they never reach back
/// into the document.
pub trait DrawTarget {
    /// Draw an axis-aligned ellipse centered at `center` with the given
    /// full extents.
    fn ellipse(&mut self, center: Point, width: f64, height: f64, options: &DrawOptions);

    /// Draw an axis-aligned rectangle from its top-left origin.
    fn rect(&mut self, origin: Point, width: f64, height: f64, options: &DrawOptions);

    /// Draw a closed polygon.
    fn polygon(&mut self, vertices: &[Point], options: &DrawOptions);
}
