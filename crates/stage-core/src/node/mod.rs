/// The Live2D model node and its loader.
pub mod live2d;

pub use live2d::Live2DModel;
