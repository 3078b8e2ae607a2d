use crate::display::DisplayRegistry;
use crate::element::Renderable;
use crate::errors::StageError;
use crate::scene::Stage;
use crate::types::NodeId;
use skia_safe::{surfaces, Color, EncodedImageFormat};
use std::path::Path;
use tracing::debug;

/// What the surface keeps its size synchronized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeTo {
    /// The bound display element's own size.
    Element,
    /// The window viewport (the `resizeTo: window` behavior).
    Window,
}

/// Configuration for acquiring a [`Surface`].
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Id of the display element to bind to.
    pub view: String,
    /// Whether the ticker starts armed; when `false`, `tick` is a no-op
    /// until `start` is called.
    pub auto_start: bool,
    pub resize_to: ResizeTo,
    pub background: Color,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            view: String::new(),
            auto_start: true,
            resize_to: ResizeTo::Window,
            background: Color::BLACK,
        }
    }
}

/// A drawing surface bound to a display element, owning the render list.
///
/// Backed by an offscreen Skia raster target; windowing and GPU presentation
/// are the host's concern. Created once and kept for the session.
pub struct Surface {
    view: String,
    resize_to: ResizeTo,
    background: Color,
    raster: skia_safe::Surface,
    width: u32,
    height: u32,
    stage: Stage,
    running: bool,
    time: f64,
}

impl Surface {
    /// Acquires a surface bound to the element named in `options.view`.
    ///
    /// Fails immediately when the element does not exist in the registry.
    pub fn new(registry: &DisplayRegistry, options: SurfaceOptions) -> Result<Self, StageError> {
        let element = registry
            .get(&options.view)
            .ok_or_else(|| StageError::DisplayElementNotFound(options.view.clone()))?;

        let (width, height) = match options.resize_to {
            ResizeTo::Element => (element.width, element.height),
            ResizeTo::Window => registry.viewport(),
        };
        let raster = surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or(StageError::SurfaceFailure)?;

        debug!(view = %options.view, width, height, "surface acquired");
        Ok(Self {
            view: options.view,
            resize_to: options.resize_to,
            background: options.background,
            raster,
            width,
            height,
            stage: Stage::new(),
            running: options.auto_start,
            time: 0.0,
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Appends a renderable to the render list.
    pub fn add_child(&mut self, renderable: Box<dyn Renderable>) -> NodeId {
        self.stage.add_child(renderable)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Re-reads the bound element / viewport size and rebuilds the raster
    /// target when it changed.
    pub fn sync_size(&mut self, registry: &DisplayRegistry) -> Result<(), StageError> {
        let element = registry
            .get(&self.view)
            .ok_or_else(|| StageError::DisplayElementNotFound(self.view.clone()))?;
        let (width, height) = match self.resize_to {
            ResizeTo::Element => (element.width, element.height),
            ResizeTo::Window => registry.viewport(),
        };
        if (width, height) != (self.width, self.height) {
            self.raster = surfaces::raster_n32_premul((width as i32, height as i32))
                .ok_or(StageError::SurfaceFailure)?;
            self.width = width;
            self.height = height;
            debug!(width, height, "surface resized");
        }
        Ok(())
    }

    /// Advances the clock by `dt` seconds, updates every node, and repaints.
    ///
    /// No-op while the ticker is stopped.
    pub fn tick(&mut self, dt: f64) -> Result<(), StageError> {
        if !self.running {
            return Ok(());
        }
        self.time += dt;

        for node in self.stage.nodes_mut() {
            node.renderable.update(dt);
        }

        let canvas = self.raster.canvas();
        canvas.clear(self.background);

        for node in self.stage.nodes() {
            if !node.visible {
                continue;
            }
            let t = &node.transform;
            let (w, h) = node.renderable.size();

            canvas.save();
            canvas.translate((t.x, t.y));
            canvas.rotate(t.rotation, None);
            canvas.scale((t.scale_x, t.scale_y));
            canvas.translate((-t.anchor_x * w, -t.anchor_y * h));
            let result = node.renderable.render(canvas, 1.0);
            canvas.restore();
            result?;
        }
        Ok(())
    }

    /// Delivers a tap at surface coordinates to every visible node, mapped
    /// into its local space. Tap mapping assumes unrotated nodes.
    pub fn dispatch_tap(&mut self, x: f32, y: f32) {
        for node in self.stage.nodes_mut() {
            if !node.visible {
                continue;
            }
            let t = &node.transform;
            if t.scale_x == 0.0 || t.scale_y == 0.0 {
                continue;
            }
            let (w, h) = node.renderable.size();
            let local_x = (x - t.x) / t.scale_x + t.anchor_x * w;
            let local_y = (y - t.y) / t.scale_y + t.anchor_y * h;
            node.renderable.handle_tap(local_x, local_y);
        }
    }

    /// Writes the current frame to `path` as a PNG.
    pub fn snapshot_png(&mut self, path: &Path) -> Result<(), StageError> {
        let image = self.raster.image_snapshot();
        let data = image
            .encode(None, EncodedImageFormat::PNG, 100)
            .ok_or_else(|| StageError::Graphics("PNG encode failed".to_string()))?;
        std::fs::write(path, data.as_bytes())?;
        Ok(())
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("view", &self.view)
            .field("size", &(self.width, self.height))
            .field("children", &self.stage.len())
            .field("running", &self.running)
            .field("time", &self.time)
            .finish()
    }
}
