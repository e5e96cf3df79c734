//! Renderer

use log::debug;

use crate::color::Rgba8;
use crate::fill::ScanlineFill;
use crate::geometry::Point;
use crate::scan::Scanline;

/// Drawing primitives provided by the host rendering layer
pub trait DrawTarget {
    /// Current width and height in pixels
    fn viewport(&self) -> (u32, u32);
    /// Fill the whole target
    fn clear(&mut self, color: Rgba8);
    /// Polyline through `points`; closed when the last point repeats the first
    fn draw_lines(&mut self, points: &[Point], color: Rgba8);
    /// Line segment from (`x0`,`y0`) to (`x1`,`y1`)
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba8);
    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba8);
    /// Outline of an axis-aligned rectangle
    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba8) {
        let pts = [Point::new(x, y), Point::new(x + w, y),
                   Point::new(x + w, y + h), Point::new(x, y + h),
                   Point::new(x, y)];
        self.draw_lines(&pts, color);
    }
}

/// Single recorded draw request
#[derive(Debug,Clone,PartialEq)]
pub enum DrawCommand {
    Clear(Rgba8),
    Lines { points: Vec<Point>, color: Rgba8 },
    Line { x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba8 },
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Rgba8 },
    Rect { x: f64, y: f64, w: f64, h: f64, color: Rgba8 },
}

/// Draw target that records requests in order
#[derive(Debug,Default,Clone)]
pub struct DrawList {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: vec![] }
    }
    /// Line segments drawn with `color`, in order
    pub fn lines(&self, color: Rgba8) -> Vec<(f64,f64,f64,f64)> {
        self.commands.iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Line { x0, y0, x1, y1, color: c } if c == color =>
                    Some((x0, y0, x1, y1)),
                _ => None,
            })
            .collect()
    }
}

impl DrawTarget for DrawList {
    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    fn clear(&mut self, color: Rgba8) {
        self.commands.push(DrawCommand::Clear(color));
    }
    fn draw_lines(&mut self, points: &[Point], color: Rgba8) {
        self.commands.push(DrawCommand::Lines { points: points.to_vec(), color });
    }
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba8) {
        self.commands.push(DrawCommand::Line { x0, y0, x1, y1, color });
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba8) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }
    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba8) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }
}

/// Draw every span of the polygon loaded in `fill`, one line per span
///
/// Returns the number of spans drawn.
pub fn render_scanlines<T: DrawTarget>(fill: &mut ScanlineFill, ren: &mut T, color: Rgba8) -> usize {
    let mut sl = Scanline::new();
    let mut n = 0;
    if ! fill.rewind_scanlines() {
        return 0;
    }
    while fill.sweep_scanline(&mut sl) {
        for span in &sl.spans {
            // Horizontal by construction: both ends use the span's y
            ren.draw_line(span.x0, span.y, span.x1, span.y, color);
            n += 1;
        }
    }
    debug!("RENDER SCANLINES: {} spans", n);
    n
}
