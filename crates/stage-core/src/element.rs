use crate::errors::StageError;
use skia_safe::Canvas;
use std::any::Any;

/// The core trait for anything that can live in the stage's render list.
///
/// Placement (position, scale, rotation) is owned by the containing
/// [`StageNode`](crate::scene::StageNode); implementations draw in their own
/// local coordinate space with the origin at their top-left corner.
pub trait Renderable: std::fmt::Debug {
    /// Returns self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
    /// Returns mutable self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Natural (untransformed) size in pixels.
    fn size(&self) -> (f32, f32);

    /// Advances internal state by `dt` seconds.
    ///
    /// # Returns
    /// * `true` if the visual appearance changed (requiring a repaint).
    fn update(&mut self, dt: f64) -> bool;

    /// Draws the node onto the canvas. The canvas matrix already carries the
    /// node's transform.
    fn render(&self, canvas: &Canvas, opacity: f32) -> Result<(), StageError>;

    /// Named hit regions containing the local-space point.
    fn hit_test(&self, _x: f32, _y: f32) -> Vec<String> {
        Vec::new()
    }

    /// Reacts to a tap at the local-space point. Default: no-op.
    fn handle_tap(&mut self, _x: f32, _y: f32) {}
}
