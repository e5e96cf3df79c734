//! Scanline fill engine
//!
//! Each polygon edge is turned into a [Line] with [join]. A horizontal
//! scanline is intersected with every edge line with [meet], and the
//! intersection is kept only when it falls on the edge itself:
//!
//! ```text
//!   u = M - v[i]          lambda = u.x / v.x   if |v.x| > epsilon
//!   v = v[i+1] - v[i]     lambda = u.y / v.y   otherwise
//!
//!   accept iff 0 < lambda <= 1
//! ```
//!
//! The half-open interval counts a vertex shared by two edges once, as the
//! end of the edge leading into it. A vertex where the scanline only touches
//! the polygon, with the edges before and after it on the same side of the
//! scanline, is a local extremum in y and is not counted at all; the fill
//! stays on both sides of it.
//!
//! Accepted crossings are sorted by x and paired into spans according to
//! the [FillRule].

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::FillConfig;
use crate::error::Result;
use crate::geometry::{join, meet, vector, Line, Point};
use crate::polygon::{extent, Polygon};
use crate::scan::{Crossing, Scanline, Span};

/// Default |v.x| below which lambda is measured along y
pub const LAMBDA_EPSILON : f64 = 0.01;

/// Lambda values this close to 0 or 1 are treated as exactly 0 or 1
const LAMBDA_SNAP : f64 = 1e-9;

/// How sorted crossings are paired into spans
#[derive(Debug,PartialEq,Copy,Clone,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Crossings (0,1), (2,3), ...; interior cutouts stay empty
    EvenOdd,
    /// Spans wherever the accumulated winding is non-zero
    NonZero,
}
impl Default for FillRule {
    fn default() -> FillRule {
        FillRule::EvenOdd
    }
}

/// Position of `m` along the edge `start -> end`
///
/// Measured along x unless the edge is within `epsilon` of vertical.
/// Results within a tiny distance of 0 or 1 snap to those values.
pub fn edge_parameter(start: Point, end: Point, m: Point, epsilon: f64) -> f64 {
    let u = vector(start, m);
    let v = vector(start, end);
    let lambda = if v.dx.abs() > epsilon {
        u.dx / v.dx
    } else {
        u.dy / v.dy
    };
    if lambda.abs() < LAMBDA_SNAP {
        0.0
    } else if (lambda - 1.0).abs() < LAMBDA_SNAP {
        1.0
    } else {
        lambda
    }
}

/// Does an edge parameter lie on the edge, in (0,1]
pub fn in_segment(lambda: f64) -> bool {
    lambda > 0.0 && lambda <= 1.0
}

/// Pair crossings, already sorted by x, into spans
pub fn pair_crossings(crossings: &[Crossing], rule: FillRule, spans: &mut Vec<Span>) {
    match rule {
        FillRule::EvenOdd => {
            for pair in crossings.chunks_exact(2) {
                spans.push(Span::new(pair[0].point, pair[1].point));
            }
        },
        FillRule::NonZero => {
            let mut winding = 0;
            let mut start = None;
            for c in crossings {
                let before = winding;
                winding += c.winding;
                if before == 0 && winding != 0 {
                    start = Some(c.point);
                } else if before != 0 && winding == 0 {
                    if let Some(s) = start.take() {
                        spans.push(Span::new(s, c.point));
                    }
                }
            }
        },
    }
}

/// Scanline fill of a single closed polygon
///
/// Vertex and edge-line buffers are owned by the engine and refilled by
/// [reset](#method.reset), so one engine can be reused frame after frame
/// without reallocating.
///
///     use fillpoly::{Point, ScanlineFill, Scanline};
///     let square = [(0.,0.), (2.,0.), (2.,2.), (0.,2.), (0.,0.)];
///     let pts : Vec<Point> = square.iter().map(|&p| p.into()).collect();
///
///     let mut fill = ScanlineFill::new();
///     fill.reset(&pts).unwrap();
///     let mut sl = Scanline::new();
///     fill.spans_at(1.0, &mut sl);
///     assert_eq!(sl.num_spans(), 1);
///     assert_eq!((sl.spans[0].x0, sl.spans[0].x1), (0.0, 2.0));
///
#[derive(Debug,Clone)]
pub struct ScanlineFill {
    vertices: Vec<Point>,
    edges: Vec<Line>,
    topmost: Point,
    bottommost: Point,
    scan_y: f64,
    epsilon: f64,
    filling_rule: FillRule,
    ready: bool,
}

impl Default for ScanlineFill {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanlineFill {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Engine with buffers pre-sized for polygons of up to `n` points
    pub fn with_capacity(n: usize) -> Self {
        Self { vertices: Vec::with_capacity(n),
               edges: Vec::with_capacity(n.saturating_sub(1)),
               topmost: Point::default(),
               bottommost: Point::default(),
               scan_y: 0.0,
               epsilon: LAMBDA_EPSILON,
               filling_rule: FillRule::EvenOdd,
               ready: false,
        }
    }
    /// Engine with tolerance and rule from `cfg`, buffers sized for `n` points
    pub fn with_config(cfg: &FillConfig, n: usize) -> Self {
        let mut new = Self::with_capacity(n);
        new.epsilon(cfg.lambda_epsilon);
        new.filling_rule(cfg.rule);
        new
    }
    pub fn filling_rule(&mut self, rule: FillRule) {
        self.filling_rule = rule;
    }
    /// Set the |v.x| threshold of the lambda test
    pub fn epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }
    /// Load a screen-space polygon
    ///
    /// The points are validated first; on failure the engine is left empty
    /// and no scanlines are produced until the next successful reset.
    pub fn reset(&mut self, points: &[Point]) -> Result<()> {
        self.ready = false;
        self.vertices.clear();
        self.edges.clear();
        Polygon::validate(points)?;
        self.load(points);
        Ok(())
    }
    /// Load a validated polygon
    pub fn reset_polygon(&mut self, polygon: &Polygon) {
        self.ready = false;
        self.vertices.clear();
        self.edges.clear();
        self.load(polygon.points());
    }
    fn load(&mut self, points: &[Point]) {
        self.vertices.extend_from_slice(points);
        self.edges.extend(points.windows(2).map(|w| join(w[0], w[1])));
        let (top, bot) = extent(points);
        self.topmost = top;
        self.bottommost = bot;
        self.scan_y = top.y;
        self.ready = true;
        debug!("FILL RESET: {} edges, y {} .. {}", self.edges.len(), top.y, bot.y);
    }
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }
    /// Topmost and bottommost vertex of the loaded polygon
    pub fn extent(&self) -> Option<(Point, Point)> {
        if self.ready {
            Some((self.topmost, self.bottommost))
        } else {
            None
        }
    }
    /// Accepted crossings of the scanline at `y`, sorted by x
    pub fn crossings(&self, y: f64, out: &mut Vec<Crossing>) {
        out.clear();
        let scanline = Line::horizontal(y);
        for (i, edge) in self.edges.iter().enumerate() {
            let m = match meet(&scanline, edge) {
                Ok(m) => m,
                Err(_) => {
                    trace!("CROSSINGS: y {} edge {} parallel, skipped", y, i);
                    continue;
                }
            };
            let (start, end) = (self.vertices[i], self.vertices[i+1]);
            let lambda = edge_parameter(start, end, m, self.epsilon);
            if ! in_segment(lambda) {
                continue;
            }
            if lambda == 1.0 && self.touches_at_end(i, y) {
                trace!("CROSSINGS: y {} edge {} touches vertex {}, skipped", y, i, i+1);
                continue;
            }
            trace!("CROSSINGS: y {} edge {} at {:.3} lambda {}", y, i, m.x, lambda);
            let winding = if end.y > start.y { 1 } else { -1 };
            // No -0.0 in span ends
            let point = Point::new(m.x + 0.0, m.y + 0.0);
            out.push(Crossing { point, edge: i, lambda, winding });
        }
        out.sort_by(|a, b| a.point.x.partial_cmp(&b.point.x).unwrap_or(Ordering::Equal));
    }
    /// Do edge `i` and the edge after it lie on the same side of `y`
    ///
    /// Only a strict same side counts; a horizontal neighbour on the
    /// scanline keeps the vertex as a single crossing.
    fn touches_at_end(&self, i: usize, y: f64) -> bool {
        let next = (i + 1) % self.edges.len();
        let before = self.vertices[i].y - y;
        let after = self.vertices[next + 1].y - y;
        before * after > 0.0
    }
    /// Crossings and spans of the scanline at `y`
    pub fn spans_at(&self, y: f64, sl: &mut Scanline) {
        sl.reset(y);
        self.crossings(y, &mut sl.crossings);
        pair_crossings(&sl.crossings, self.filling_rule, &mut sl.spans);
        debug!("SPANS: y {} crossings {} spans {}", y, sl.crossings.len(), sl.spans.len());
    }
    /// Start sweeping at the topmost vertex
    pub fn rewind_scanlines(&mut self) -> bool {
        if ! self.ready {
            return false;
        }
        self.scan_y = self.topmost.y;
        true
    }
    /// Advance to the next scanline that has spans
    ///
    /// Scanlines step by 1 from topmost y while `y <= bottommost.y`.
    /// Returns false once the bottom is passed.
    pub fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool {
        if ! self.ready {
            return false;
        }
        while self.scan_y <= self.bottommost.y {
            let y = self.scan_y;
            self.scan_y += 1.0;
            self.spans_at(y, sl);
            if sl.num_spans() != 0 {
                return true;
            }
        }
        false
    }
    /// Every span of the loaded polygon, top to bottom
    pub fn spans(&mut self) -> Vec<Span> {
        let mut out = vec![];
        let mut sl = Scanline::new();
        if self.rewind_scanlines() {
            while self.sweep_scanline(&mut sl) {
                out.extend_from_slice(&sl.spans);
            }
        }
        out
    }
}
