//! # live2d-core
//!
//! Format-neutral runtime pieces for Live2D models, shared by anything that
//! embeds them: a unified [`ModelSettings`] view over the descriptor formats
//! in [`live2d_data`], a [`MotionManager`] for name-addressed motion
//! triggering with priorities and fades, and a [`HitTester`] for named hit
//! regions.
//!
//! This crate does no IO and no drawing. The moc and motion files referenced
//! by a descriptor are opaque here; evaluating them is the Cubism core's job.

pub mod hit;
pub mod motion;
pub mod settings;

pub use hit::{HitBounds, HitTester};
pub use motion::{ActiveMotion, MotionManager, MotionPriority};
pub use settings::{HitAreaRef, ModelSettings, MotionRef};
