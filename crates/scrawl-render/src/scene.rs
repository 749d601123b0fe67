//! Backend-agnostic display list and the surface shapes draw onto.

use kurbo::{BezPath, Ellipse as KurboEllipse, PathEl, Point, Rect, Shape as KurboShape};
use peniko::Color;
use scrawl_core::{DrawOptions, DrawTarget};

/// One item of the display list.
#[derive(Debug, Clone)]
pub enum DisplayItem {
    /// Filled region.
    Fill { path: BezPath, color: Color },
    /// Stroked outline. `dash` carries the on/off pattern for dashed
    /// strokes, `None` for solid ones.
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
        dash: Option<[f64; 2]>,
    },
}

/// An ordered display list, back to front.
///
/// A backend (GPU scene, SVG writer, raster target) walks the items in
/// order; this crate never touches pixels itself.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<DisplayItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Simple seeded random number generator (xorshift32).
/// Used for deterministic hand-drawn effects.
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random offset in [-amount, amount].
    fn offset(&mut self, amount: f64) -> f64 {
        ((self.next_u32() as f64 / u32::MAX as f64) * 2.0 - 1.0) * amount
    }
}

/// Apply hand-drawn jitter to a path.
///
/// Line segments get a slight perpendicular bow and randomly offset
/// endpoints; curve control points wobble less than endpoints. The same
/// (seed, pass) pair always produces the same path, so elements do not
/// shimmer between frames. `pass` selects an independent jitter sequence
/// for the multi-stroke sketchy effect.
fn rough_path(path: &BezPath, roughness: f64, seed: u32, pass: u32) -> BezPath {
    if roughness <= 0.0 {
        return path.clone();
    }
    let max_offset = roughness * 2.0;
    let bowing = roughness;
    let mut rng = SimpleRng::new(seed.wrapping_add(pass.wrapping_mul(99991)));

    let jitter = |p: Point, rng: &mut SimpleRng, amount: f64| {
        Point::new(p.x + rng.offset(amount), p.y + rng.offset(amount))
    };

    let mut result = BezPath::new();
    let mut last = Point::ZERO;
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                result.move_to(jitter(*p, &mut rng, max_offset));
                last = *p;
            }
            PathEl::LineTo(p) => {
                // Bow the segment at its midpoint, perpendicular to its
                // direction, then offset the endpoint.
                let dx = p.x - last.x;
                let dy = p.y - last.y;
                let len = (dx * dx + dy * dy).sqrt();
                let bow = rng.offset(bowing * roughness * len / 200.0);
                let (perp_x, perp_y) = if len > 0.001 {
                    (-dy / len, dx / len)
                } else {
                    (0.0, 0.0)
                };
                let mid = Point::new(
                    (last.x + p.x) / 2.0 + perp_x * bow,
                    (last.y + p.y) / 2.0 + perp_y * bow,
                );
                result.quad_to(mid, jitter(*p, &mut rng, max_offset));
                last = *p;
            }
            PathEl::QuadTo(p1, p2) => {
                result.quad_to(
                    jitter(*p1, &mut rng, max_offset * 0.7),
                    jitter(*p2, &mut rng, max_offset),
                );
                last = *p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                result.curve_to(
                    jitter(*p1, &mut rng, max_offset * 0.5),
                    jitter(*p2, &mut rng, max_offset * 0.5),
                    jitter(*p3, &mut rng, max_offset),
                );
                last = *p3;
            }
            PathEl::ClosePath => {
                result.close_path();
            }
        }
    }
    result
}

/// [`DrawTarget`] implementation recording into a [`Scene`].
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
}

impl<'a> SceneSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }

    /// Record fill then stroke(s) for a path.
    fn emit(&mut self, path: BezPath, options: &DrawOptions) {
        if let Some(fill) = options.fill {
            // The fill wobbles less than the outline so it stays under
            // the strokes.
            let fill_path = rough_path(&path, options.roughness * 0.3, options.seed, 0);
            self.scene.items.push(DisplayItem::Fill {
                path: fill_path,
                color: fill.into(),
            });
        }
        if options.roughness > 0.0 {
            // Two offset strokes create the sketchy double-line look.
            for pass in 0..2 {
                self.scene.items.push(DisplayItem::Stroke {
                    path: rough_path(&path, options.roughness, options.seed, pass),
                    color: options.stroke.into(),
                    width: options.stroke_width,
                    dash: options.dash,
                });
            }
        } else {
            self.scene.items.push(DisplayItem::Stroke {
                path,
                color: options.stroke.into(),
                width: options.stroke_width,
                dash: options.dash,
            });
        }
    }
}

impl DrawTarget for SceneSurface<'_> {
    fn ellipse(&mut self, center: Point, width: f64, height: f64, options: &DrawOptions) {
        let ellipse = KurboEllipse::new(center, (width / 2.0, height / 2.0), 0.0);
        self.emit(ellipse.to_path(0.1), options);
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64, options: &DrawOptions) {
        let rect = Rect::new(origin.x, origin.y, origin.x + width, origin.y + height);
        self.emit(rect.to_path(0.1), options);
    }

    fn polygon(&mut self, vertices: &[Point], options: &DrawOptions) {
        let mut path = BezPath::new();
        if let Some((first, rest)) = vertices.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close_path();
        }
        self.emit(path, options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_core::SerializableColor;

    fn options() -> DrawOptions {
        DrawOptions {
            seed: 42,
            roughness: 0.0,
            stroke: SerializableColor::black(),
            stroke_width: 2.0,
            dash: None,
            fill: None,
        }
    }

    #[test]
    fn test_outline_only_records_single_stroke() {
        let mut scene = Scene::new();
        let mut surface = SceneSurface::new(&mut scene);
        surface.rect(Point::new(0.0, 0.0), 10.0, 10.0, &options());
        assert_eq!(scene.len(), 1);
        assert!(matches!(scene.items()[0], DisplayItem::Stroke { .. }));
    }

    #[test]
    fn test_fill_is_recorded_before_stroke() {
        let mut scene = Scene::new();
        let mut surface = SceneSurface::new(&mut scene);
        let mut opts = options();
        opts.fill = Some(SerializableColor::white());
        surface.ellipse(Point::new(50.0, 25.0), 90.0, 40.0, &opts);
        assert_eq!(scene.len(), 2);
        assert!(matches!(scene.items()[0], DisplayItem::Fill { .. }));
        assert!(matches!(scene.items()[1], DisplayItem::Stroke { .. }));
    }

    #[test]
    fn test_rough_strokes_come_in_pairs_and_are_deterministic() {
        let build = || {
            let mut scene = Scene::new();
            let mut surface = SceneSurface::new(&mut scene);
            let mut opts = options();
            opts.roughness = 1.0;
            surface.polygon(
                &[
                    Point::new(0.0, 0.0),
                    Point::new(100.0, 0.0),
                    Point::new(50.0, 80.0),
                ],
                &opts,
            );
            scene
        };
        let a = build();
        let b = build();
        assert_eq!(a.len(), 2);
        match (&a.items()[0], &b.items()[0]) {
            (DisplayItem::Stroke { path: pa, .. }, DisplayItem::Stroke { path: pb, .. }) => {
                assert_eq!(pa.elements(), pb.elements());
            }
            _ => panic!("expected stroke items"),
        }
    }

    #[test]
    fn test_dash_pattern_is_carried_through() {
        let mut scene = Scene::new();
        let mut surface = SceneSurface::new(&mut scene);
        let mut opts = options();
        opts.dash = Some([12.0, 12.0]);
        surface.rect(Point::new(0.0, 0.0), 10.0, 10.0, &opts);
        match &scene.items()[0] {
            DisplayItem::Stroke { dash, .. } => assert_eq!(*dash, Some([12.0, 12.0])),
            _ => panic!("expected a stroke item"),
        }
    }

    #[test]
    fn test_empty_polygon_records_empty_path() {
        let mut scene = Scene::new();
        let mut surface = SceneSurface::new(&mut scene);
        surface.polygon(&[], &options());
        match &scene.items()[0] {
            DisplayItem::Stroke { path, .. } => assert!(path.elements().is_empty()),
            _ => panic!("expected a stroke item"),
        }
    }
}
