//! Painting of single decorative elements: node backgrounds, icons, and the
//! compound decorations around text boxes.

use crate::render::canvas::RasterCanvas;
use crate::render::color::dominant_color;
use crate::scene::{Color, Corners, Decoration, Fill, Rect, SceneNode, ShapeStyle};

/// Resolve the representative fill color of a decoration.
///
/// Flat colors and shape fills are used directly; raster content goes
/// through the color extractor, but only when the decoration reports a
/// positive intrinsic size, otherwise the transparent sentinel stands in.
pub(crate) fn resolve_fill(decoration: &Decoration) -> Color {
    match &decoration.fill {
        Fill::Solid(color) => *color,
        Fill::Shape(shape) => shape.color,
        Fill::Raster(buffer) => {
            if decoration.has_intrinsic_size() {
                dominant_color(buffer)
            } else {
                Color::TRANSPARENT
            }
        }
    }
}

/// Paint a node's background over its exact on-screen rectangle.
///
/// Shape-capable decorations re-render their native silhouette (rounded or
/// cut corners) at the node's bounds instead of a plain rectangle fill, so
/// themed shapes survive the wireframe pass.
pub fn paint_background(node: &SceneNode, canvas: &mut RasterCanvas) {
    let decoration = match &node.background {
        Some(d) => d,
        None => return,
    };
    if !node.bounds.has_area() {
        return;
    }
    if let Some(shape) = decoration.shape() {
        draw_shape(shape, node.bounds, canvas);
        return;
    }
    canvas.fill_rect(node.bounds, resolve_fill(decoration));
}

/// Paint a decoration at `(origin_x, origin_y)` plus its own bounds offset,
/// sized by its intrinsic dimensions. Intrinsic size is used deliberately so
/// decorations scaled by their container still paint at a representative
/// size. Non-positive intrinsic sizes paint nothing.
pub fn paint_decoration(
    decoration: &Decoration,
    origin_x: i32,
    origin_y: i32,
    canvas: &mut RasterCanvas,
) {
    if !decoration.has_intrinsic_size() {
        return;
    }
    let rect = Rect::new(
        origin_x + decoration.bounds.left,
        origin_y + decoration.bounds.top,
        decoration.intrinsic_width,
        decoration.intrinsic_height,
    );
    canvas.fill_rect(rect, resolve_fill(decoration));
}

fn draw_shape(shape: &ShapeStyle, bounds: Rect, canvas: &mut RasterCanvas) {
    match shape.corners {
        Corners::Rounded { radius } => canvas.fill_rounded_rect(bounds, radius, shape.color),
        Corners::Cut { size } => canvas.fill_cut_rect(bounds, size, shape.color),
    }
}
