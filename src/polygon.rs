//! Closed polygons

use crate::error::Error;
use crate::error::PolygonDefect;
use crate::error::Result;
use crate::geometry::{join, signed_area, Line, Point};

/// Largest coordinate magnitude a polygon may have
///
/// Scanlines step by whole units, so y values must stay well inside the
/// range where `y + 1.0` is exact.
pub const MAX_COORDINATE : f64 = 16_777_216.0;

/// Vertex order of a polygon, as seen on a y-down screen
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// Simple polygon with explicit closure
///
/// Points `p[0] .. p[n-1]` with `p[n-1] == p[0]`, giving `n-1` directed
/// edges. Constructed only through validation, so every `Polygon` has at
/// least 4 points and no zero-length edge.
#[derive(Debug,Clone,PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Validate and wrap a closed point sequence
    pub fn new(points: Vec<Point>) -> Result<Self> {
        Self::validate(&points)?;
        Ok(Self { points })
    }
    /// Check the size, range, closure, and edge length rules without taking ownership
    pub fn validate(points: &[Point]) -> Result<()> {
        let n = points.len();
        if n < 4 {
            return Err(Error::InvalidPolygon(PolygonDefect::TooFewPoints(n)));
        }
        for (i, p) in points.iter().enumerate() {
            if ! p.x.is_finite() || ! p.y.is_finite() {
                return Err(Error::InvalidPolygon(PolygonDefect::NonFinite(i)));
            }
            if p.x.abs() > MAX_COORDINATE || p.y.abs() > MAX_COORDINATE {
                return Err(Error::InvalidPolygon(PolygonDefect::OutOfRange(i)));
            }
        }
        if points[0] != points[n-1] {
            return Err(Error::InvalidPolygon(PolygonDefect::NotClosed));
        }
        if let Some(i) = points.windows(2).position(|w| w[0] == w[1]) {
            return Err(Error::InvalidPolygon(PolygonDefect::ZeroLengthEdge(i)));
        }
        Ok(())
    }
    /// Mapped copy that keeps closure exact
    ///
    /// The result is validated again: rounding can collapse neighbouring
    /// points or push them out of range.
    pub(crate) fn map<F>(&self, f: F) -> Result<Polygon>
        where F: Fn(Point) -> Point
    {
        let mut points : Vec<Point> = self.points.iter().map(|&p| f(p)).collect();
        let n = points.len();
        points[n-1] = points[0];
        Polygon::new(points)
    }
    /// All points, closure point included
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    /// Number of points, closure point included
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn num_edges(&self) -> usize {
        self.points.len() - 1
    }
    /// Edge `i`, from vertex `i` to vertex `i+1`
    pub fn edge(&self, i: usize) -> (Point, Point) {
        (self.points[i], self.points[i+1])
    }
    /// One line per edge
    pub fn edge_lines(&self) -> Vec<Line> {
        self.points.windows(2).map(|w| join(w[0], w[1])).collect()
    }
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }
    /// Orientation from the sign of the signed area
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() < 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
    /// Reverse the vertex order; closure is preserved
    pub fn invert(&mut self) {
        self.points.reverse();
    }
    /// Reverse the vertex order if needed so the polygon runs in `dir`
    pub fn arrange_orientation(&mut self, dir: Orientation) {
        if self.orientation() != dir {
            self.invert();
        }
    }
    /// Vertices with minimum and maximum y, see [topmost_bottommost]
    pub fn topmost_bottommost(&self) -> (Point, Point) {
        extent(&self.points)
    }
}

/// Vertices with minimum and maximum y
///
/// Strict comparisons; on ties the first vertex in order wins.
pub fn topmost_bottommost(polygon: &Polygon) -> (Point, Point) {
    polygon.topmost_bottommost()
}

/// Topmost and bottommost of a non-empty point slice
pub(crate) fn extent(points: &[Point]) -> (Point, Point) {
    let mut topmost = points[0];
    let mut botmost = points[0];
    for p in points {
        if p.y < topmost.y {
            topmost = *p;
        }
        if p.y > botmost.y {
            botmost = *p;
        }
    }
    (topmost, botmost)
}

/// Build a polygon one vertex at a time
///
///     use fillpoly::PolygonBuilder;
///     let mut b = PolygonBuilder::new();
///     b.move_to(10.0, 10.0);
///     b.line_to(50.0, 90.0);
///     b.line_to(90.0, 10.0);
///     let poly = b.close_polygon().unwrap();
///     assert_eq!(poly.len(), 4);
///
#[derive(Debug,Default,Clone)]
pub struct PolygonBuilder {
    points: Vec<Point>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self { points: vec![] }
    }
    /// Start over at `(x,y)`
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.points.clear();
        self.points.push(Point::new(x, y));
    }
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
    }
    /// Append the closure point (if missing) and validate
    pub fn close_polygon(mut self) -> Result<Polygon> {
        if let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) {
            if first != last || self.points.len() == 1 {
                self.points.push(first);
            }
        }
        Polygon::new(self.points)
    }
}
