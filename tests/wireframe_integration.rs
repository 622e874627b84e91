//! End-to-end wireframe scenarios over the public API.

use sceneframe::render::traverse;
use sceneframe::scene::{
    Color, Content, Decoration, Fill, Insets, PixelBuffer, Rect, SceneNode, TextContent, TextLine,
};

fn measure_width(text: &str) -> i32 {
    // Stand-in for a provider measurement function: 12px per glyph.
    text.chars().count() as i32 * 12
}

#[test]
fn text_line_becomes_single_rounded_box() {
    // Full-screen transparent container holding one text node with a single
    // line "OK": expect exactly one rounded box at (0, 0)..(width, 20) and an
    // otherwise untouched canvas.
    let mut root = SceneNode::container(Rect::new(0, 0, 200, 100));
    let mut label = SceneNode::container(Rect::new(0, 0, 200, 100));
    let line_width = measure_width("OK");
    label.content = Content::Text(TextContent {
        color: Color::BLACK,
        line_height: 20,
        lines: vec![TextLine { text: "OK".to_string(), width: line_width }],
        decorations: Default::default(),
        indicator: None,
    });
    root.children.push(label);

    let canvas = traverse(&root);

    // Center of the box is painted in the text color.
    assert_eq!(
        canvas.pixel(line_width as u32 / 2, 10),
        Some(Color::BLACK)
    );
    // Rounded silhouette: the extreme corner pixel stays empty.
    assert_eq!(canvas.pixel(0, 0), Some(Color::TRANSPARENT));
    // Nothing outside the box is touched.
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            if x >= line_width as u32 || y >= 20 {
                assert_eq!(canvas.pixel(x, y), Some(Color::TRANSPARENT), "({x}, {y})");
            }
        }
    }
}

#[test]
fn image_child_overpaints_flat_background() {
    // Flat blue container background, one image child (2x2 solid green,
    // fully opaque) fully inside bounds: blue everywhere except the image's
    // padded content box, which is green.
    let container_bounds = Rect::new(0, 0, 40, 40);
    let mut root = SceneNode::container(container_bounds);
    root.background = Some(Decoration {
        bounds: container_bounds,
        intrinsic_width: 40,
        intrinsic_height: 40,
        fill: Fill::Solid(Color::rgb(0, 0, 255)),
    });

    let mut image = SceneNode::container(Rect::new(10, 10, 12, 12));
    image.content = Content::Image {
        decoration: Some(Decoration {
            bounds: Rect::new(0, 0, 2, 2),
            intrinsic_width: 2,
            intrinsic_height: 2,
            fill: Fill::Raster(PixelBuffer::solid(2, 2, Color::rgb(0, 255, 0))),
        }),
    };
    root.children.push(image);

    let canvas = traverse(&root);

    assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(0, 0, 255)));
    assert_eq!(canvas.pixel(39, 39), Some(Color::rgb(0, 0, 255)));
    // The image rect spans the node's content box (10..22), not 2x2.
    assert_eq!(canvas.pixel(10, 10), Some(Color::rgb(0, 255, 0)));
    assert_eq!(canvas.pixel(21, 21), Some(Color::rgb(0, 255, 0)));
    assert_eq!(canvas.pixel(22, 22), Some(Color::rgb(0, 0, 255)));
}

#[test]
fn hidden_subtree_output_equals_tree_without_it() {
    let base = {
        let mut root = SceneNode::container(Rect::new(0, 0, 50, 50));
        let mut child = SceneNode::container(Rect::new(5, 5, 10, 10));
        child.background = Some(Decoration {
            bounds: Rect::new(5, 5, 10, 10),
            intrinsic_width: 10,
            intrinsic_height: 10,
            fill: Fill::Solid(Color::rgb(77, 77, 77)),
        });
        root.children.push(child);
        root
    };

    let mut with_hidden = base.clone();
    let mut hidden = SceneNode::container(Rect::new(20, 20, 20, 20));
    hidden.visible = false;
    hidden.background = Some(Decoration {
        bounds: Rect::new(20, 20, 20, 20),
        intrinsic_width: 20,
        intrinsic_height: 20,
        fill: Fill::Solid(Color::rgb(255, 0, 0)),
    });
    with_hidden.children.push(hidden);

    assert_eq!(traverse(&with_hidden), traverse(&base));
}

#[test]
fn repeated_traversal_is_pixel_identical() {
    let mut root = SceneNode::container(Rect::new(0, 0, 64, 64));
    let mut text = SceneNode::container(Rect::new(4, 4, 56, 40));
    text.padding = Insets { left: 2, top: 2, right: 2, bottom: 2 };
    text.content = Content::Text(TextContent {
        color: Color::rgb(20, 20, 20),
        line_height: 12,
        lines: vec![
            TextLine { text: "first".to_string(), width: measure_width("first") },
            TextLine { text: "second".to_string(), width: measure_width("second") },
        ],
        decorations: Default::default(),
        indicator: None,
    });
    root.children.push(text);

    let first = traverse(&root);
    let second = traverse(&root);
    assert_eq!(first, second);
}

#[test]
fn scene_loaded_from_json_renders() {
    let json = r#"{
        "bounds": { "left": 0, "top": 0, "width": 20, "height": 20 },
        "visible": true,
        "children": [
            {
                "bounds": { "left": 2, "top": 2, "width": 6, "height": 6 },
                "visible": true,
                "background": {
                    "bounds": { "left": 2, "top": 2, "width": 6, "height": 6 },
                    "intrinsic_width": 6,
                    "intrinsic_height": 6,
                    "fill": { "Solid": { "r": 200, "g": 100, "b": 50, "a": 255 } }
                }
            }
        ]
    }"#;
    let scene: SceneNode = serde_json::from_str(json).expect("parse scene");
    let canvas = traverse(&scene);
    assert_eq!(canvas.pixel(4, 4), Some(Color::rgb(200, 100, 50)));
    assert_eq!(canvas.pixel(10, 10), Some(Color::TRANSPARENT));
}
