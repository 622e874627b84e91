use sceneframe::scene::{Color, Decoration, Fill, Rect, SceneNode};
use sceneframe::Renderer;

fn tiny_scene() -> SceneNode {
    let mut root = SceneNode::container(Rect::new(0, 0, 16, 16));
    root.background = Some(Decoration {
        bounds: Rect::new(0, 0, 16, 16),
        intrinsic_width: 16,
        intrinsic_height: 16,
        fill: Fill::Solid(Color::rgb(12, 34, 56)),
    });
    root
}

#[tokio::test]
async fn render_on_worker_returns_canvas() {
    let renderer = Renderer::new();
    let canvas = renderer.render(tiny_scene()).await.expect("render");
    assert_eq!((canvas.width, canvas.height), (16, 16));
    assert_eq!(canvas.pixel(8, 8), Some(Color::rgb(12, 34, 56)));
    renderer.close().await.expect("close");
}

#[tokio::test]
async fn render_to_file_persists_png() {
    let renderer = Renderer::new();
    let path = std::env::temp_dir().join("sceneframe_async_smoke.png");
    let canvas = renderer
        .render_to_file(tiny_scene(), &path)
        .await
        .expect("render_to_file");
    assert_eq!((canvas.width, canvas.height), (16, 16));

    let data = std::fs::read(&path).expect("png written");
    assert_eq!(&data[..4], &[0x89, b'P', b'N', b'G']);
    let _ = std::fs::remove_file(&path);
    renderer.close().await.expect("close");
}

#[tokio::test]
async fn render_to_unwritable_path_still_delivers_canvas() {
    // Persistence failure at the output boundary is logged, not raised.
    let renderer = Renderer::new();
    let path = std::path::Path::new("/nonexistent-dir/sceneframe.png");
    let canvas = renderer
        .render_to_file(tiny_scene(), path)
        .await
        .expect("canvas still delivered");
    assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(12, 34, 56)));
    renderer.close().await.expect("close");
}
