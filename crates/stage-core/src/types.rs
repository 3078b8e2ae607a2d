//! Shared data types for the stage.

/// A unique identifier for a node in the stage's render list.
pub type NodeId = usize;

/// The 2D placement of a stage node, in surface coordinates.
///
/// `anchor` is the normalized origin inside the node's box (0,0 = top-left),
/// applied before scale and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Rotation in degrees around the anchor.
    pub rotation: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }

    pub fn set_anchor(&mut self, anchor_x: f32, anchor_y: f32) {
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn scale(&self) -> (f32, f32) {
        (self.scale_x, self.scale_y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
