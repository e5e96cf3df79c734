//! Colors

use serde::{Deserialize, Serialize};

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
    /// Draw `self` over the opaque background `bg`
    ///
    /// Fully opaque colors replace the background, anything else is
    /// interpolated component-wise by alpha.
    pub fn over(&self, bg: [u8;3]) -> [u8;3] {
        match self.a {
            255 => [self.r, self.g, self.b],
            0   => bg,
            a   => [lerp_u8(bg[0], self.r, a),
                    lerp_u8(bg[1], self.g, a),
                    lerp_u8(bg[2], self.b, a)],
        }
    }
}

/// Interpolate between `p` and `q` by `a/255` using fixed point math
///
/// See agg_color_rgba.h:454 of agg version 2.4
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q,p,a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0 : i32 = (q - p) * a + base_msb - v;
    let t1 : i32 = ((t0 >> base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Colors used when drawing a frame
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba8,
    /// Polygon outline
    pub outline: Rgba8,
    /// Scanline fill spans
    pub fill: Rgba8,
    /// Topmost vertex marker
    pub topmost: Rgba8,
    /// Bottommost vertex marker
    pub bottommost: Rgba8,
    /// Debug scanline
    pub scanline: Rgba8,
    /// Debug scanline crossings
    pub crossing: Rgba8,
    /// Start vertex of an edge crossed by the debug scanline
    pub vertex: Rgba8,
    /// Spans on the debug scanline
    pub debug_span: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::new( 10,  10,  10, 255),
            outline:    Rgba8::new(255, 100,  10, 255),
            fill:       Rgba8::new(200, 200,  10, 100),
            topmost:    Rgba8::new(255,   0,   0, 200),
            bottommost: Rgba8::new( 10, 100, 255, 200),
            scanline:   Rgba8::new(200, 200, 200, 180),
            crossing:   Rgba8::new(100, 200,  10, 180),
            vertex:     Rgba8::new(200, 200,  10, 180),
            debug_span: Rgba8::new(200, 100,  10, 180),
        }
    }
}
