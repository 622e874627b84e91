//! Input data model: the scene tree handed to the wireframe renderer.
//!
//! The tree is read-only input owned by the scene provider (a UI framework
//! adapter, a recorded session, a JSON fixture). The renderer never mutates
//! it. All types derive serde so trees can be loaded from JSON by the CLI
//! and by test fixtures; raster pixel payloads travel as base64 strings.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in absolute window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Whether the rectangle has anything to paint.
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Padding insets around a node's content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Sentinel for "nothing meaningfully visible": painting with it is a no-op.
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Pre-rasterized pixel content supplied by the provider.
///
/// The renderer may downsample this buffer during color extraction but never
/// mutates it. Pixels are tightly packed RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` long. Serialized as base64.
    #[serde(with = "base64_bytes")]
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self { width, height, pixels }
    }

    /// A buffer filled with a single color, mainly useful in tests/fixtures.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self { width, height, pixels }
    }

    /// RGBA channels of the pixel at `(x, y)`. Callers must stay in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        (
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(de)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}

/// Corner treatment for a shape-style decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corners {
    Rounded { radius: i32 },
    Cut { size: i32 },
}

/// A themed shape decoration that knows how to draw its own silhouette
/// (rounded or cut corners) instead of a plain rectangle fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub color: Color,
    pub corners: Corners,
}

/// How a decoration is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// A flat color, used directly.
    Solid(Color),
    /// A themed shape with its own native draw routine.
    Shape(ShapeStyle),
    /// Arbitrary raster content; its dominant color stands in for it.
    Raster(PixelBuffer),
}

/// A paintable element attached to a node: a background, an icon, or one of
/// the compound decorations around a text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    /// Positioned bounds; left/top are offsets relative to the paint origin.
    pub bounds: Rect,
    /// Intrinsic (unscaled) size as reported by the provider.
    pub intrinsic_width: i32,
    pub intrinsic_height: i32,
    pub fill: Fill,
}

impl Decoration {
    pub fn has_intrinsic_size(&self) -> bool {
        self.intrinsic_width > 0 && self.intrinsic_height > 0
    }

    /// Capability check: does this decoration expose a native shape-draw
    /// routine? Shape-style backgrounds are re-rendered through it so their
    /// rounded/cut silhouettes survive the wireframe pass.
    pub fn shape(&self) -> Option<&ShapeStyle> {
        match &self.fill {
            Fill::Shape(s) => Some(s),
            _ => None,
        }
    }
}

/// One laid-out line of a text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    /// Measured pixel width of the run, provided by the text boundary.
    pub width: i32,
}

/// Up to four decorations positioned around a text box, sharing one
/// decoration-to-text gap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompoundDecorations {
    pub start: Option<Decoration>,
    pub top: Option<Decoration>,
    pub end: Option<Decoration>,
    pub bottom: Option<Decoration>,
    pub gap: i32,
}

/// Text content of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub color: Color,
    pub line_height: i32,
    pub lines: Vec<TextLine>,
    #[serde(default)]
    pub decorations: CompoundDecorations,
    /// Checked/selected indicator (e.g. a checkbox glyph), if any.
    #[serde(default)]
    pub indicator: Option<Decoration>,
}

/// Foreground content of a node. The kind set is closed; the walker matches
/// exhaustively so a new kind cannot be silently dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Content {
    #[default]
    None,
    Text(TextContent),
    Image { decoration: Option<Decoration> },
}

/// A node in the visual scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// On-screen bounds in absolute window coordinates.
    pub bounds: Rect,
    pub visible: bool,
    #[serde(default)]
    pub padding: Insets,
    #[serde(default)]
    pub background: Option<Decoration>,
    #[serde(default)]
    pub content: Content,
    /// Children in paint order (recursed front-to-back as listed).
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// A bare container node, mainly useful in tests/fixtures.
    pub fn container(bounds: Rect) -> Self {
        Self {
            bounds,
            visible: true,
            padding: Insets::default(),
            background: None,
            content: Content::None,
            children: Vec::new(),
        }
    }
}
