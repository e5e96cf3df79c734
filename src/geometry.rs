//! Points, vectors, and lines in homogeneous form
//!
//! A [Line] `(a,b,c)` is the set of points with `a*x + b*y = c`.
//! [join] builds the line through two points, [meet] the point shared
//! by two lines.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::error::Result;

/// Relative tolerance on the determinant used by [meet]
pub const MEET_EPSILON : f64 = 1e-12;

/// Point in model or screen space
#[derive(Debug,Default,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64,f64)> for Point {
    fn from(p: (f64,f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Displacement between two points
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
    pub fn len(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Vector from `a` to `b`
pub fn vector(a: Point, b: Point) -> Vector {
    Vector::new(b.x - a.x, b.y - a.y)
}

/// Line of infinite extent, `a*x + b*y = c`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
    /// Horizontal line `y = y`
    pub fn horizontal(y: f64) -> Self {
        Self::new(0.0, 1.0, y)
    }
    /// Length of the normal `(a,b)`
    pub fn norm(&self) -> f64 {
        self.a.hypot(self.b)
    }
    /// True for the zero line returned by joining a point with itself
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }
    /// Residual `a*x + b*y - c` at `p`
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y - self.c
    }
    /// Is `p` within distance `tol` of the line
    pub fn contains(&self, p: Point, tol: f64) -> bool {
        if self.is_degenerate() {
            return false;
        }
        self.eval(p).abs() <= tol * self.norm()
    }
}

/// Line through points `a` and `b`
///
/// `a` and `b` must be distinct; coincident points give the zero line.
///
///     use fillpoly::{join, Point};
///     let l = join(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
///     assert_eq!(l.eval(Point::new(1.0, 1.0)), 0.0);
///
pub fn join(a: Point, b: Point) -> Line {
    let alpha = b.x - a.x;
    let beta  = b.y - a.y;
    Line::new(-beta, alpha, -beta * a.x + alpha * a.y)
}

/// Point lying on both `l1` and `l2`
///
/// Solved with Cramer's rule. Lines that are parallel or identical, within
/// [MEET_EPSILON] relative to the line normals, have no unique meet and
/// return [Error::DegenerateIntersection].
pub fn meet(l1: &Line, l2: &Line) -> Result<Point> {
    let (a1, b1, c1) = (l1.a, l1.b, l1.c);
    let (a2, b2, c2) = (l2.a, l2.b, l2.c);
    let det = a1 * b2 - a2 * b1;
    let scale = l1.norm() * l2.norm();
    if scale == 0.0 || det.abs() <= MEET_EPSILON * scale {
        return Err(Error::DegenerateIntersection);
    }
    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Ok(Point::new(x, y))
}

/// Signed area of a closed point sequence
///
/// Sum of the signed areas of each oriented side. In a y-down screen
/// coordinate system clockwise order is positive, counter-clockwise
/// negative.
pub fn signed_area(points: &[Point]) -> f64 {
    points.windows(2)
        .map(|w| 0.5 * (w[0].x * w[1].y - w[1].x * w[0].y))
        .sum()
}
