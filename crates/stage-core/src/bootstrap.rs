use crate::assets::AssetLoader;
use crate::errors::StageError;
use crate::node::Live2DModel;
use crate::surface::Surface;
use crate::types::NodeId;
use live2d_core::MotionPriority;
use tracing::info;

/// Placement and interaction wiring applied to the bootstrapped model.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Absolute position in surface coordinates.
    pub position: (f32, f32),
    pub scale: (f32, f32),
    /// Hit region that triggers the motion.
    pub hit_area: String,
    /// Motion group triggered when the region is hit.
    pub motion_group: String,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            position: (100.0, 100.0),
            scale: (0.2, 0.2),
            hit_area: "body".to_string(),
            motion_group: "tap_body".to_string(),
        }
    }
}

/// Loads one model onto the surface and wires its tap interaction.
///
/// Sequence: resolve the model by URL (the sole suspension point), append it
/// to the render list, apply the fixed transform, then register exactly one
/// hit listener that triggers the configured motion when the reported region
/// set contains the configured hit area. Events without that area are
/// ignored.
///
/// A failed load propagates to the caller and leaves the render list
/// untouched.
pub async fn bootstrap(
    surface: &mut Surface,
    loader: &dyn AssetLoader,
    url: &str,
    options: BootstrapOptions,
) -> Result<NodeId, StageError> {
    // The model must not be inserted or transformed before the load
    // completes; sequential awaiting enforces the ordering.
    let model = Live2DModel::from(loader, url).await?;
    info!(model = model.settings().name(), url, "bootstrapping model");

    let id = surface.add_child(Box::new(model));

    if let Some(node) = surface.stage_mut().node_mut(id) {
        node.transform.set_position(options.position.0, options.position.1);
        node.transform.set_scale(options.scale.0, options.scale.1);

        if let Some(model) = node.renderable.as_any_mut().downcast_mut::<Live2DModel>() {
            let hit_area = options.hit_area;
            let motion_group = options.motion_group;
            model.on_hit(move |hit_areas, motions| {
                if hit_areas.iter().any(|area| area == &hit_area) {
                    motions.start_motion(&motion_group, None, MotionPriority::Normal);
                }
            });
        }
    }

    Ok(id)
}
