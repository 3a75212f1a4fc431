//! Replays glyph outlines from the label font into the glyph being drawn.

use kurbo::{Affine, BezPath, CubicBez, Point};
use skrifa::outline::OutlinePen;

/// Max distance, in font units, a quadratic approximation of a cubic may stray.
const CUBIC_TOLERANCE: f64 = 1.0;

/// An [`OutlinePen`] that applies a transform before recording into a [`BezPath`].
pub struct TransformPen<'a> {
    path: &'a mut BezPath,
    transform: Affine,
    current: Point,
}

impl<'a> TransformPen<'a> {
    pub fn new(path: &'a mut BezPath, transform: Affine) -> Self {
        TransformPen {
            path,
            transform,
            current: Point::ZERO,
        }
    }

    fn map(&self, x: f32, y: f32) -> Point {
        self.transform * Point::new(x as f64, y as f64)
    }
}

impl OutlinePen for TransformPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
        self.current = p;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
        self.current = p;
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.quad_to(self.map(cx0, cy0), p);
        self.current = p;
    }

    // glyf can't hold cubics
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let cubic = CubicBez::new(
            self.current,
            self.map(cx0, cy0),
            self.map(cx1, cy1),
            self.map(x, y),
        );
        for (_, _, quad) in cubic.to_quads(CUBIC_TOLERANCE) {
            self.path.quad_to(quad.p1, quad.p2);
        }
        self.current = cubic.p3;
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
