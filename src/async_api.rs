//! Async-friendly rendering facade backed by a dedicated worker thread.
//!
//! Traversal iterates pixels and downsamples images, which can be costly for
//! deep or image-heavy trees, so it runs off the caller's task on a worker
//! thread that owns the canvas for each invocation. Commands flow over a
//! channel; each carries a single-shot completion sender the async caller
//! awaits. No mid-traversal cancellation: once started, a render runs to
//! completion.

use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::thread;

use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::persist;
use crate::render::{walker, RasterCanvas};
use crate::scene::SceneNode;

enum Command {
    Render(Box<SceneNode>, oneshot::Sender<Result<RasterCanvas>>),
    RenderToFile(Box<SceneNode>, PathBuf, oneshot::Sender<Result<RasterCanvas>>),
    Close(oneshot::Sender<Result<()>>),
}

/// A worker-backed renderer handle.
///
/// The worker thread executes traversals and persistence synchronously, one
/// command at a time, so async callers get an async interface without any
/// shared mutable render state.
#[derive(Clone)]
pub struct Renderer {
    cmd_tx: Sender<Command>,
}

impl Renderer {
    /// Create a renderer (spawns the background worker thread).
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Render(scene, resp) => {
                        let canvas = walker::traverse(&scene);
                        let _ = resp.send(Ok(canvas));
                    }
                    Command::RenderToFile(scene, path, resp) => {
                        let canvas = walker::traverse(&scene);
                        // Persistence failure is non-fatal: the canvas was
                        // still produced correctly and is delivered anyway.
                        if let Err(e) = persist::save_png(&canvas, &path) {
                            log::error!("failed to persist wireframe to {:?}: {}", path, e);
                        }
                        let _ = resp.send(Ok(canvas));
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        Self { cmd_tx }
    }

    /// Render a scene tree on the worker and await the finished canvas.
    pub async fn render(&self, scene: SceneNode) -> Result<RasterCanvas> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Render(Box::new(scene), tx))
            .map_err(|_| Error::Canceled("render worker is gone".to_string()))?;
        rx.await
            .map_err(|e| Error::Canceled(format!("Render canceled: {}", e)))?
    }

    /// Render a scene tree, persist it as PNG at `path`, and await the
    /// finished canvas. A persistence failure is logged on the worker and
    /// does not fail the call.
    pub async fn render_to_file(
        &self,
        scene: SceneNode,
        path: impl Into<PathBuf>,
    ) -> Result<RasterCanvas> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::RenderToFile(Box::new(scene), path.into(), tx))
            .map_err(|_| Error::Canceled("render worker is gone".to_string()))?;
        rx.await
            .map_err(|e| Error::Canceled(format!("RenderToFile canceled: {}", e)))?
    }

    /// Shut down the background worker.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Canceled(format!("Close canceled: {}", e)))?
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
