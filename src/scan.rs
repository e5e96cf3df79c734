//! Scanline containers

use crate::geometry::Point;

/// Accepted intersection of a scanline with a polygon edge
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Crossing {
    /// Where the scanline meets the edge
    pub point: Point,
    /// Index of the edge, from vertex `edge` to vertex `edge+1`
    pub edge: usize,
    /// Position along the edge, in (0,1]
    pub lambda: f64,
    /// +1 if the edge heads down the screen, -1 if it heads up
    pub winding: i32,
}

/// Horizontal fill span from `x0` to `x1` at `y`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Span {
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
}

impl Span {
    /// Span between two crossings; y always comes from `a`
    pub fn new(a: Point, b: Point) -> Self {
        let (x0, x1) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        Self { x0, x1, y: a.y }
    }
    pub fn len(&self) -> f64 {
        self.x1 - self.x0
    }
    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0
    }
}

/// Crossings and spans of a single scanline
#[derive(Debug,Default,Clone)]
pub struct Scanline {
    pub y: f64,
    pub crossings: Vec<Crossing>,
    pub spans: Vec<Span>,
}

impl Scanline {
    pub fn new() -> Self {
        Self { y: 0.0, crossings: vec![], spans: vec![] }
    }
    /// Clear crossings and spans, keeping their allocations
    pub fn reset(&mut self, y: f64) {
        self.y = y;
        self.crossings.clear();
        self.spans.clear();
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
}
