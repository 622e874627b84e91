//! Sceneframe: scene-tree wireframe rasterizer
//!
//! Converts a hierarchical visual scene (a tree of on-screen elements with
//! bounds, backgrounds, text, and images) into a simplified vector-style
//! "wireframe" on a raster surface: backgrounds become flat or
//! shape-approximated rectangles, text becomes rounded line boxes, images
//! become solid rectangles colored by their dominant color. No glyphs or
//! image pixels are reproduced, which makes the output a privacy-preserving
//! abstraction of the screen's layout.
//!
//! # Example
//!
//! ```
//! use sceneframe::render;
//! use sceneframe::scene::{Color, Content, Rect, SceneNode, TextContent, TextLine};
//!
//! let mut root = SceneNode::container(Rect::new(0, 0, 320, 240));
//! let mut label = SceneNode::container(Rect::new(10, 10, 100, 20));
//! label.content = Content::Text(TextContent {
//!     color: Color::BLACK,
//!     line_height: 20,
//!     lines: vec![TextLine { text: "OK".to_string(), width: 24 }],
//!     decorations: Default::default(),
//!     indicator: None,
//! });
//! root.children.push(label);
//!
//! let canvas = render::traverse(&root);
//! assert_eq!((canvas.width, canvas.height), (320, 240));
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod scene;

// Wireframe rendering core: canvas, color extraction, painters, walker.
pub mod render;

// Output boundary: PNG encoding and disk persistence.
pub mod persist;

// Async worker-backed facade over the synchronous traversal.
pub mod async_api;

// Re-export the handle type at the crate root for ergonomic callers.
pub use async_api::Renderer;
pub use render::{dominant_color, traverse, RasterCanvas};
pub use scene::SceneNode;
