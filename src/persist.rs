//! Output boundary: encoding a finished canvas as a still image and writing
//! it to disk.
//!
//! The canvas is treated as immutable here; the intermediate encoded buffer
//! is dropped on every exit path once written. Callers that want persistence
//! to be non-fatal (the worker's render-to-file path) log the error and move
//! on — the in-memory canvas was still produced correctly.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba};

use crate::error::{Error, Result};
use crate::render::RasterCanvas;

/// Encode the canvas as PNG bytes.
pub fn encode_png(canvas: &RasterCanvas) -> Result<Vec<u8>> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(canvas.width, canvas.height, canvas.pixels.clone()).ok_or_else(
            || Error::EncodeError("pixel buffer does not match canvas dimensions".to_string()),
        )?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| Error::EncodeError(e.to_string()))?;
    Ok(out.into_inner())
}

/// Encode the canvas and write it to `path`.
pub fn save_png(canvas: &RasterCanvas, path: &Path) -> Result<()> {
    let data = encode_png(canvas)?;
    std::fs::write(path, data)?;
    Ok(())
}
