//! Wireframe rendering core: canvas, color extraction, per-node painters,
//! and the scene-tree walker that ties them together.

pub mod canvas;
pub mod color;
pub mod drawable;
pub mod text;
pub mod walker;

pub use canvas::RasterCanvas;
pub use color::dominant_color;
pub use walker::traverse;
