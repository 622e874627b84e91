//! The mutable raster surface wireframes are painted onto.
//!
//! Painting is overwrite-only: later fills replace earlier pixels in
//! overlapping regions, there is no blending of the output. Fills with a
//! fully transparent color are no-ops, matching what drawing with a
//! transparent paint does on a real canvas.

use crate::scene::{Color, Rect};

/// RGBA8 output surface. Owned exclusively by one traversal invocation;
/// its dimensions are fixed for that traversal's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterCanvas {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, row-major, `width * height * 4` long.
    pub pixels: Vec<u8>,
}

impl RasterCanvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Color of the pixel at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i] = color.r;
        self.pixels[i + 1] = color.g;
        self.pixels[i + 2] = color.b;
        self.pixels[i + 3] = color.a;
    }

    /// Fill a rectangle, clipped to the canvas. Transparent colors and
    /// degenerate rectangles paint nothing.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 || !rect.has_area() {
            return;
        }
        let x0 = rect.left.max(0);
        let y0 = rect.top.max(0);
        let x1 = (rect.left + rect.width).min(self.width as i32);
        let y1 = (rect.top + rect.height).min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Fill a rounded rectangle. The radius is clamped to half the shorter
    /// side; a clamped radius of zero or one degenerates to a plain fill.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        if color.a == 0 || !rect.has_area() {
            return;
        }
        let r = radius.clamp(0, rect.width.min(rect.height) / 2);
        if r <= 1 {
            self.fill_rect(rect, color);
            return;
        }
        let right = rect.left + rect.width;
        let bottom = rect.top + rect.height;
        let x0 = rect.left.max(0);
        let y0 = rect.top.max(0);
        let x1 = right.min(self.width as i32);
        let y1 = bottom.min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = corner_depth(x, rect.left, right, r);
                let dy = corner_depth(y, rect.top, bottom, r);
                if dx > 0 && dy > 0 && dx * dx + dy * dy > (r - 1) * (r - 1) {
                    continue;
                }
                self.put(x, y, color);
            }
        }
    }

    /// Fill a rectangle with its four corners cut off diagonally by `size`
    /// pixels (the cut-corner shape silhouette).
    pub fn fill_cut_rect(&mut self, rect: Rect, size: i32, color: Color) {
        if color.a == 0 || !rect.has_area() {
            return;
        }
        let s = size.clamp(0, rect.width.min(rect.height) / 2);
        if s <= 0 {
            self.fill_rect(rect, color);
            return;
        }
        let right = rect.left + rect.width;
        let bottom = rect.top + rect.height;
        let x0 = rect.left.max(0);
        let y0 = rect.top.max(0);
        let x1 = right.min(self.width as i32);
        let y1 = bottom.min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = corner_depth(x, rect.left, right, s);
                let dy = corner_depth(y, rect.top, bottom, s);
                if dx + dy > s - 1 {
                    continue;
                }
                self.put(x, y, color);
            }
        }
    }
}

/// How many pixels deep `v` sits inside a corner band of width `r`, measured
/// toward the corner, or 0 outside the bands.
fn corner_depth(v: i32, lo: i32, hi: i32, r: i32) -> i32 {
    if v < lo + r {
        lo + r - 1 - v
    } else if v >= hi - r {
        v - (hi - r)
    } else {
        0
    }
}
