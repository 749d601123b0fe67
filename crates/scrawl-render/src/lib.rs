//! Scrawl display-list renderer.
//!
//! Converts a canvas document into an ordered list of fill/stroke display
//! items. Pixel backends (GPU, SVG, raster) consume the list; none live in
//! this crate.

pub mod renderer;
pub mod scene;

pub use renderer::render_document;
pub use scene::{DisplayItem, Scene, SceneSurface};
