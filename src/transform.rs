//! Model to screen transformation

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Point;
use crate::polygon::Polygon;

/// Uniform scale followed by a translation
///
/// `screen = model * s + (tx,ty)`
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct ViewTransform {
    pub s: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Identity transform
    pub fn new() -> Self {
        Self { s: 1.0, tx: 0.0, ty: 0.0 }
    }
    /// Transform with origin `origin` and scale `s`
    pub fn with_origin(origin: Point, s: f64) -> Self {
        debug_assert!(s > 0.0, "view scale must be positive");
        Self { s, tx: origin.x, ty: origin.y }
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Add a scaling to the transform, applied after the existing translation
    pub fn scale(&mut self, s: f64) {
        self.s  *= s;
        self.tx *= s;
        self.ty *= s;
    }
    pub fn origin(&self) -> Point {
        Point::new(self.tx, self.ty)
    }
    /// Perform the transform
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.s + self.tx,
         y * self.s + self.ty)
    }
    pub fn apply(&self, p: Point) -> Point {
        let (x,y) = self.transform(p.x, p.y);
        Point::new(x, y)
    }
    /// Transform a polygon point-wise
    ///
    /// Fails with [InvalidPolygon](crate::Error::InvalidPolygon) when the
    /// mapped points no longer form a valid polygon.
    pub fn to_screen(&self, polygon: &Polygon) -> Result<Polygon> {
        polygon.map(|p| self.apply(p))
    }
    /// Transform raw points into a reusable buffer
    ///
    /// When the input is closed the closure point is copied from the
    /// transformed first point.
    pub fn to_screen_into(&self, points: &[Point], out: &mut Vec<Point>) {
        out.clear();
        out.extend(points.iter().map(|&p| self.apply(p)));
        let n = points.len();
        if n > 1 && points[0] == points[n-1] {
            out[n-1] = out[0];
        }
    }
}

/// Map `polygon` from model space to screen space
pub fn to_screen(polygon: &Polygon, view_origin: Point, view_scale: f64) -> Result<Polygon> {
    ViewTransform::with_origin(view_origin, view_scale).to_screen(polygon)
}
