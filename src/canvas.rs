//! Software canvas
//!
//! An RGB pixel buffer that implements [DrawTarget]. Every primitive is
//! clipped to the buffer and blended over the existing pixels with the
//! color's alpha. Frames can be written to and compared as image files.

use std::path::Path;

use crate::color::Rgba8;
use crate::error::Result;
use crate::geometry::Point;
use crate::render::DrawTarget;

const BPP : usize = 3;

/// RGB pixel buffer, row-major
#[derive(Debug,Clone)]
pub struct Canvas {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Create a new canvas of width * height pixels, cleared to black
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create canvas with 0 width or height");
        }
        Self { data: vec![0u8; width * height * BPP], width, height }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Raw RGB bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    /// Color at (`x`,`y`), always opaque
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        assert!(x < self.width, "request {} >= {} width :: get", x, self.width);
        assert!(y < self.height, "request {} >= {} height :: get", y, self.height);
        let i = (y * self.width + x) * BPP;
        Rgba8::new(self.data[i], self.data[i+1], self.data[i+2], 255)
    }
    fn limits(&self) -> (i64,i64,i64,i64) {
        (0, self.width as i64 - 1, 0, self.height as i64 - 1)
    }
    /// Blend `c` into the pixel at (`x`,`y`); outside locations are ignored
    pub fn blend_pixel(&mut self, x: i64, y: i64, c: Rgba8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if x < xmin || x > xmax || y < ymin || y > ymax {
            return;
        }
        let i = (y as usize * self.width + x as usize) * BPP;
        let out = c.over([self.data[i], self.data[i+1], self.data[i+2]]);
        self.data[i..i+BPP].copy_from_slice(&out);
    }
    /// Blend pixels from (`x1`,`y`) to (`x2`,`y`) inclusive
    pub fn blend_hline(&mut self, x1: i64, y: i64, x2: i64, c: Rgba8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        for x in x1.max(xmin) ..= x2.min(xmax) {
            self.blend_pixel(x, y, c);
        }
    }
    /// Blend pixels from (`x`,`y1`) to (`x`,`y2`) inclusive
    pub fn blend_vline(&mut self, x: i64, y1: i64, y2: i64, c: Rgba8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (y1,y2) = if y2 > y1 { (y1,y2) } else { (y2,y1) };
        if x > xmax || x < xmin || y1 > ymax || y2 < ymin {
            return;
        }
        for y in y1.max(ymin) ..= y2.min(ymax) {
            self.blend_pixel(x, y, c);
        }
    }
    /// Bresenham line, both end points included
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, c: Rgba8) {
        let (mut x, mut y) = (x1.floor() as i64, y1.floor() as i64);
        let (x2, y2) = (x2.floor() as i64, y2.floor() as i64);
        if y == y2 {
            return self.blend_hline(x, y, x2, c);
        }
        if x == x2 {
            return self.blend_vline(x, y, y2, c);
        }
        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend_pixel(x, y, c);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
    /// Write the canvas to an image file; format follows the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        write_file(&self.data, self.width, self.height, filename)
    }
}

impl DrawTarget for Canvas {
    fn viewport(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
    fn clear(&mut self, color: Rgba8) {
        let rgb = [color.r, color.g, color.b];
        for px in self.data.chunks_exact_mut(BPP) {
            px.copy_from_slice(&rgb);
        }
    }
    fn draw_lines(&mut self, points: &[Point], color: Rgba8) {
        for w in points.windows(2) {
            self.line(w[0].x, w[0].y, w[1].x, w[1].y, color);
        }
    }
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba8) {
        self.line(x0, y0, x1, y1, color);
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba8) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x1, x2) = (x.floor() as i64, (x + w).ceil() as i64 - 1);
        let (y1, y2) = (y.floor() as i64, (y + h).ceil() as i64 - 1);
        for yi in y1 ..= y2 {
            self.blend_hline(x1, yi, x2, color);
        }
    }
    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba8) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x1, x2) = (x.floor() as i64, (x + w).ceil() as i64 - 1);
        let (y1, y2) = (y.floor() as i64, (y + h).ceil() as i64 - 1);
        self.blend_hline(x1, y1, x2, color);
        if y2 > y1 {
            self.blend_hline(x1, y2, x2, color);
        }
        if y2 - y1 > 1 {
            self.blend_vline(x1, y1 + 1, y2 - 1, color);
            if x2 > x1 {
                self.blend_vline(x2, y1 + 1, y2 - 1, color);
            }
        }
    }
}

/// Read an image file as RGB bytes, width, and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGB bytes to an image file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::RGB(8))?;
    Ok(())
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 || d1.len() != d2.len() {
        log::warn!("IMG DIFF: size {}x{} vs {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut same = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("IMG DIFF: {} [{},{},{}]: {} {}", i, (i/3)%w1, (i/3)/w1, i%3, v1, v2);
            same = false;
        }
    }
    Ok(same)
}
