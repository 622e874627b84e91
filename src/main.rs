use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sceneframe::scene::SceneNode;
use sceneframe::{persist, render};

/// Render a scene-tree JSON file into a wireframe PNG.
#[derive(Parser)]
#[command(name = "sceneframe", version, about)]
struct Args {
    /// Path to the scene JSON file
    scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "wireframe.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.scene)
        .with_context(|| format!("reading scene file {:?}", args.scene))?;
    let scene: SceneNode = serde_json::from_str(&raw).context("parsing scene JSON")?;

    let canvas = render::traverse(&scene);
    persist::save_png(&canvas, &args.output)
        .with_context(|| format!("writing {:?}", args.output))?;

    println!(
        "wrote {}x{} wireframe to {}",
        canvas.width,
        canvas.height,
        args.output.display()
    );
    Ok(())
}
