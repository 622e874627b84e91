//! Text nodes become rounded-rectangle line boxes: one box per laid-out
//! line, sized by the provider-measured run width, with compound
//! decorations (start/top/end/bottom) painted around the text box.

use crate::render::canvas::RasterCanvas;
use crate::render::drawable;
use crate::scene::{Rect, SceneNode, TextContent};

/// Paint a text-bearing node: its compound decorations, then one rounded
/// line box per glyph line. No-op when the node has no area.
pub fn paint_text_node(node: &SceneNode, text: &TextContent, canvas: &mut RasterCanvas) {
    if !node.bounds.has_area() {
        return;
    }

    let bounds = node.bounds;
    let pad = node.padding;
    let decorations = &text.decorations;
    let gap = decorations.gap;

    // Start/end decorations default vertically to top padding + gap;
    // top/bottom decorations default horizontally to left padding.
    if let Some(start) = &decorations.start {
        drawable::paint_decoration(start, bounds.left + pad.left, bounds.top + pad.top + gap, canvas);
    }
    if let Some(top) = &decorations.top {
        drawable::paint_decoration(top, bounds.left + pad.left, bounds.top + pad.top + gap, canvas);
    }
    if let Some(end) = &decorations.end {
        let x = bounds.left + (bounds.width - pad.right - end.intrinsic_width - gap);
        drawable::paint_decoration(end, x, bounds.top + pad.top + gap, canvas);
    }
    if let Some(bottom) = &decorations.bottom {
        let y = bounds.top + (bounds.height - pad.bottom - bottom.intrinsic_height - gap);
        drawable::paint_decoration(bottom, bounds.left + pad.left, y, canvas);
    }

    let start_offset = decorations
        .start
        .as_ref()
        .map(|d| d.intrinsic_width + gap)
        .unwrap_or(0);

    for (i, line) in text.lines.iter().enumerate() {
        // The checked indicator is repainted once per line at the fixed
        // content origin. Idempotent overdraw, kept as-is.
        if let Some(indicator) = &text.indicator {
            drawable::paint_decoration(
                indicator,
                bounds.left + pad.left,
                bounds.top + pad.top,
                canvas,
            );
        }

        let left = bounds.left + pad.left + start_offset;
        let top = bounds.top + text.line_height * i as i32 + pad.top + gap;
        let line_box = Rect::new(left, top, line.width, text.line_height);
        canvas.fill_rounded_rect(line_box, text.line_height, text.color);
    }
}
