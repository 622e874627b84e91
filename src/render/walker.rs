//! Recursive scene-tree traversal: culling, dispatch, and paint order.
//!
//! The walk is pre-order depth-first. Each visited node paints its
//! background first, then its content, then recurses into children in
//! listed order, so descendants overwrite ancestors in overlapping regions.

use std::time::Instant;

use crate::render::canvas::RasterCanvas;
use crate::render::{drawable, text};
use crate::scene::{Content, Decoration, Rect, SceneNode};

/// Render `root` and its subtree into a fresh canvas sized from the root's
/// bounds. The canvas dimensions are fixed for the traversal's lifetime; a
/// degenerate root yields an empty canvas with nothing visited.
pub fn traverse(root: &SceneNode) -> RasterCanvas {
    let started = Instant::now();
    let mut canvas = RasterCanvas::new(
        root.bounds.width.max(0) as u32,
        root.bounds.height.max(0) as u32,
    );
    visit(root, &mut canvas);
    log::info!("wireframe traversal completed in {:?}", started.elapsed());
    canvas
}

fn visit(node: &SceneNode, canvas: &mut RasterCanvas) {
    // A hidden or off-canvas node prunes its whole subtree.
    if !node.visible || !corner_visible(node.bounds, canvas) {
        return;
    }

    drawable::paint_background(node, canvas);

    match &node.content {
        Content::None => {}
        Content::Text(content) => text::paint_text_node(node, content, canvas),
        Content::Image { decoration } => paint_image_node(node, decoration.as_ref(), canvas),
    }

    for child in &node.children {
        visit(child, canvas);
    }
}

/// One-corner visibility test: only the top-left corner is checked, with
/// inclusive `[0, width] x [0, height]` bounds. A node whose body is largely
/// on-canvas but whose corner is just outside gets culled. Kept exactly
/// as-is for output compatibility; see DESIGN.md.
fn corner_visible(bounds: Rect, canvas: &RasterCanvas) -> bool {
    bounds.left >= 0
        && bounds.left <= canvas.width as i32
        && bounds.top >= 0
        && bounds.top <= canvas.height as i32
}

/// Image nodes paint one rectangle colored by the image's dominant color
/// (or its flat color), anchored at the image decoration's own offset but
/// extending to the full padded content box rather than the image's
/// intrinsic size.
fn paint_image_node(node: &SceneNode, decoration: Option<&Decoration>, canvas: &mut RasterCanvas) {
    let decoration = match decoration {
        Some(d) => d,
        None => return,
    };
    if !node.bounds.has_area() || !decoration.has_intrinsic_size() {
        return;
    }

    let color = drawable::resolve_fill(decoration);
    let content_left = node.bounds.left + node.padding.left;
    let content_top = node.bounds.top + node.padding.top;
    let left = content_left + decoration.bounds.left;
    let top = content_top + decoration.bounds.top;
    let right = content_left + node.bounds.width;
    let bottom = content_top + node.bounds.height;
    canvas.fill_rect(Rect::new(left, top, right - left, bottom - top), color);
}
