//! Per-frame drawing of the polygon, its fill, and the debug scanline

use log::{debug, warn};

use crate::color::Palette;
use crate::config::Config;
use crate::error::Result;
use crate::fill::ScanlineFill;
use crate::geometry::Point;
use crate::render::{render_scanlines, DrawTarget};
use crate::scan::Scanline;
use crate::view::ViewState;

/// Half size of the topmost / bottommost markers
const EXTENT_MARK : f64 = 4.0;
/// Half size of the crossing / vertex markers on the debug scanline
const CROSSING_MARK : f64 = 2.0;

/// The demo artwork: a concave nine point polygon in model units
pub fn artwork() -> Vec<Point> {
    let pts = [(0.0, 1.0), (2.0, 0.0), (1.0, 1.5), (2.0, 2.5), (3.0, 2.5),
               (2.0, 4.0), (0.0, 5.0), (-1.0, 2.0), (0.0, 1.0)];
    pts.iter().map(|&p| Point::from(p)).collect()
}

/// What a frame produced
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct FrameStats {
    /// Fill spans drawn
    pub spans: usize,
    /// Crossings on the debug scanline
    pub debug_crossings: usize,
    /// Spans on the debug scanline
    pub debug_spans: usize,
    pub topmost: Point,
    pub bottommost: Point,
}

/// Frame renderer owning the reusable fill buffers
#[derive(Debug,Clone)]
pub struct Scene {
    fill: ScanlineFill,
    screen: Vec<Point>,
    scanline: Scanline,
    pub palette: Palette,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Scene {
    pub fn new(cfg: &Config) -> Self {
        Self::with_capacity(cfg, 0)
    }
    /// Scene with buffers sized for polygons of up to `n` points
    pub fn with_capacity(cfg: &Config, n: usize) -> Self {
        Self { fill: ScanlineFill::with_config(&cfg.fill, n),
               screen: Vec::with_capacity(n),
               scanline: Scanline::new(),
               palette: cfg.colors,
        }
    }
    pub fn fill(&self) -> &ScanlineFill {
        &self.fill
    }
    /// Screen-space points of the last frame
    pub fn screen(&self) -> &[Point] {
        &self.screen
    }
    /// (topmost, bottommost) screen y of the last successfully filled frame
    pub fn extent_y(&self) -> Option<(f64, f64)> {
        self.fill.extent().map(|(t, b)| (t.y, b.y))
    }
    /// Draw one frame of `model` as seen through `view`
    ///
    /// The background and outline are always drawn. If the transformed
    /// points do not form a valid polygon the error is returned before any
    /// scanline work.
    pub fn render<T: DrawTarget>(&mut self, model: &[Point], view: &ViewState, ren: &mut T) -> Result<FrameStats> {
        let pal = self.palette;
        ren.clear(pal.background);

        view.transform().to_screen_into(model, &mut self.screen);
        if ! self.screen.is_empty() {
            ren.draw_lines(&self.screen, pal.outline);
        }
        if let Err(err) = self.fill.reset(&self.screen) {
            warn!("FRAME: not filled: {}", err);
            return Err(err);
        }
        let mut stats = FrameStats::default();
        if let Some((top, bot)) = self.fill.extent() {
            let s = EXTENT_MARK;
            ren.draw_rect(top.x - s, top.y - s, 2.0 * s, 2.0 * s, pal.topmost);
            ren.draw_rect(bot.x - s, bot.y - s, 2.0 * s, 2.0 * s, pal.bottommost);
            stats.topmost = top;
            stats.bottommost = bot;
        }
        stats.spans = render_scanlines(&mut self.fill, ren, pal.fill);

        if view.show_scanline {
            self.debug_scanline(view.scanline_y, ren, &mut stats);
        }
        debug!("FRAME: {:?}", stats);
        Ok(stats)
    }
    fn debug_scanline<T: DrawTarget>(&mut self, y: f64, ren: &mut T, stats: &mut FrameStats) {
        let pal = self.palette;
        let s = CROSSING_MARK;
        self.fill.spans_at(y, &mut self.scanline);
        let vertices = self.fill.vertices();
        for c in &self.scanline.crossings {
            let m = c.point;
            let v = vertices[c.edge];
            ren.draw_rect(m.x - s, m.y - s, 2.0 * s, 2.0 * s, pal.crossing);
            ren.draw_rect(v.x - s, v.y - s, 2.0 * s, 2.0 * s, pal.vertex);
            ren.draw_line(v.x, v.y, m.x, m.y, pal.vertex);
        }
        let (w, _) = ren.viewport();
        let w = f64::from(w);
        ren.draw_line(w / 2.0, y, w, y, pal.scanline);
        for span in &self.scanline.spans {
            ren.draw_line(span.x0, span.y, span.x1, span.y, pal.debug_span);
        }
        stats.debug_crossings = self.scanline.crossings.len();
        stats.debug_spans = self.scanline.spans.len();
    }
}
