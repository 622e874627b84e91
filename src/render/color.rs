//! Dominant-color extraction for raster decorations.
//!
//! Large images are downsampled to roughly 100x100 samples (preserving
//! aspect ratio) so extraction cost stays flat regardless of input size.
//! Pixels below the visibility alpha threshold are ignored; the rest are
//! premultiplied to a canonical opaque key and counted. The mode wins, with
//! ties going to the color encountered first.

use std::collections::HashMap;

use crate::scene::{Color, PixelBuffer};

/// Above this pixel count the image is downsampled before histogramming.
pub const NATIVE_SAMPLE_LIMIT: u32 = 10_000;

/// Target side length of the downsampled grid.
const TARGET_SAMPLE_SIDE: f64 = 100.0;

/// Pixels with alpha below this are not meaningfully visible.
pub const MIN_VISIBLE_ALPHA: u8 = 128;

/// Compute the single dominant opaque color of `image`.
///
/// Returns [`Color::TRANSPARENT`] for zero-area images and for images where
/// no pixel passes the alpha filter. The input is never mutated.
pub fn dominant_color(image: &PixelBuffer) -> Color {
    if image.width == 0 || image.height == 0 {
        return Color::TRANSPARENT;
    }

    let (sample_w, sample_h) = sample_grid(image.width, image.height);

    // Key -> (count, first-seen order). The order index makes the tie-break
    // deterministic: first-encountered color wins.
    let mut histogram: HashMap<u32, (u32, usize)> = HashMap::new();
    let mut seen = 0usize;
    for sy in 0..sample_h {
        let y = (sy as u64 * image.height as u64 / sample_h as u64) as u32;
        for sx in 0..sample_w {
            let x = (sx as u64 * image.width as u64 / sample_w as u64) as u32;
            let (r, g, b, a) = image.pixel(x, y);
            if a < MIN_VISIBLE_ALPHA {
                continue;
            }
            let key = pack(premultiply(r, a), premultiply(g, a), premultiply(b, a));
            let entry = histogram.entry(key).or_insert_with(|| {
                let idx = seen;
                seen += 1;
                (0, idx)
            });
            entry.0 += 1;
        }
    }

    let mut best: Option<(u32, u32, usize)> = None;
    for (&key, &(count, idx)) in &histogram {
        let replace = match best {
            None => true,
            Some((_, best_count, best_idx)) => {
                count > best_count || (count == best_count && idx < best_idx)
            }
        };
        if replace {
            best = Some((key, count, idx));
        }
    }

    match best {
        Some((key, _, _)) => {
            let color = unpack(key);
            log::debug!(
                "dominant color: rgba({}, {}, {}, {})",
                color.r,
                color.g,
                color.b,
                color.a
            );
            color
        }
        None => Color::TRANSPARENT,
    }
}

/// Sampling grid dimensions: native below the limit, otherwise an
/// aspect-preserving grid with area on the order of 100x100.
fn sample_grid(width: u32, height: u32) -> (u32, u32) {
    if width as u64 * height as u64 <= NATIVE_SAMPLE_LIMIT as u64 {
        return (width, height);
    }
    let (w, h) = if width > height {
        let aspect = (width as f64 / height as f64).sqrt();
        (TARGET_SAMPLE_SIDE * aspect, TARGET_SAMPLE_SIDE / aspect)
    } else {
        let aspect = (height as f64 / width as f64).sqrt();
        (TARGET_SAMPLE_SIDE / aspect, TARGET_SAMPLE_SIDE * aspect)
    };
    ((w as u32).max(1), (h as u32).max(1))
}

/// Premultiply a channel by its alpha, truncating to integer.
fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((channel as u32 * alpha as u32) / 255) as u8
}

fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

fn unpack(key: u32) -> Color {
    Color::rgb((key >> 16) as u8, (key >> 8) as u8, key as u8)
}
