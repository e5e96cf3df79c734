//! View state driven by keyboard input

use log::debug;

use crate::config::ViewConfig;
use crate::geometry::Point;
use crate::input::{Key, KeyState, Modifiers};
use crate::transform::ViewTransform;

/// Host-owned view of the polygon, updated between frames
///
/// Arrow keys pan the origin while held. On key-down, SHIFT+Up/Down zoom
/// and CONTROL+Up/Down step the debug scanline. Escape requests quit.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ViewState {
    /// Screen position of the model origin
    pub origin: Point,
    /// Screen pixels per model unit
    pub scale: f64,
    /// y of the debug scanline, in screen space
    pub scanline_y: f64,
    pub show_scanline: bool,
    pub quit: bool,
    limits: ViewConfig,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

impl ViewState {
    pub fn new(cfg: &ViewConfig) -> Self {
        Self { origin: cfg.origin,
               scale: cfg.scale,
               scanline_y: cfg.scanline_y,
               show_scanline: cfg.show_scanline,
               quit: false,
               limits: *cfg,
        }
    }
    /// Model to screen transform for the current origin and scale
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::with_origin(self.origin, self.scale)
    }
    /// Apply one frame of input
    ///
    /// `viewport` bounds the origin. `extent` is the (topmost, bottommost)
    /// screen y of the polygon and bounds the debug scanline; without it
    /// the scanline moves unclamped.
    pub fn update(&mut self, keys: &KeyState, viewport: (u32, u32), extent: Option<(f64, f64)>) {
        let (w, h) = (f64::from(viewport.0), f64::from(viewport.1));
        let step = self.limits.pan_step;
        let m = keys.modifiers;

        if ! m.intersects(Modifiers::SHIFT | Modifiers::CONTROL) {
            if keys.is_held(Key::Up)    { self.origin.y = (self.origin.y - step).max(0.0); }
            if keys.is_held(Key::Down)  { self.origin.y = (self.origin.y + step).min(h); }
            if keys.is_held(Key::Left)  { self.origin.x = (self.origin.x - step).max(0.0); }
            if keys.is_held(Key::Right) { self.origin.x = (self.origin.x + step).min(w); }
        }
        for key in keys.pressed() {
            match key {
                Key::Escape => self.quit = true,
                Key::Up if m.contains(Modifiers::CONTROL) => {
                    self.scanline_y -= 1.0;
                    if let Some((top, _)) = extent {
                        self.scanline_y = self.scanline_y.max(top);
                    }
                },
                Key::Down if m.contains(Modifiers::CONTROL) => {
                    self.scanline_y += 1.0;
                    if let Some((_, bot)) = extent {
                        self.scanline_y = self.scanline_y.min(bot);
                    }
                },
                Key::Up if m.contains(Modifiers::SHIFT) => {
                    self.scale = (self.scale + 1.0).min(self.limits.max_scale);
                },
                Key::Down if m.contains(Modifiers::SHIFT) => {
                    self.scale = (self.scale - 1.0).max(self.limits.min_scale);
                },
                _ => {},
            }
        }
        debug!("VIEW: origin {:?} scale {} scanline {}", self.origin, self.scale, self.scanline_y);
    }
}
