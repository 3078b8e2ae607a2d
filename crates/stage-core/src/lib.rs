//! # stage-core
//!
//! An offscreen 2D stage for Live2D character models, rasterized with
//! [Skia](https://skia.org/).
//!
//! The engine substrate is deliberately small: a [`Surface`] bound to a
//! named display element owns an append-order render list ([`Stage`]) of
//! [`Renderable`] nodes and repaints it on every tick. The interesting node
//! is [`Live2DModel`], which resolves a whole model bundle (descriptor, moc,
//! textures) from a URL through the async [`AssetLoader`] seam, triggers
//! named motions via [`live2d_core`], and reports taps on named hit regions
//! to registered listeners.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stage_core::{bootstrap, BootstrapOptions, DisplayElement, DisplayRegistry,
//!                  HttpAssetLoader, Surface, SurfaceOptions};
//!
//! # async fn run() -> Result<(), stage_core::StageError> {
//! let mut registry = DisplayRegistry::new(1280, 720);
//! registry.register(DisplayElement::new("pio", 800, 600));
//!
//! let mut surface = Surface::new(&registry, SurfaceOptions {
//!     view: "pio".to_string(),
//!     ..SurfaceOptions::default()
//! })?;
//!
//! let loader = HttpAssetLoader::new();
//! bootstrap(&mut surface, &loader, "https://example.com/shizuku.model.json",
//!           BootstrapOptions::default()).await?;
//! surface.tick(1.0 / 60.0)?;
//! # Ok(())
//! # }
//! ```

/// Asset loading strategies (HTTP, filesystem).
pub mod assets;

/// The scene bootstrap operation: load, insert, place, wire interaction.
pub mod bootstrap;

/// Display element registry, the stand-in for the hosting document.
pub mod display;

/// The base `Renderable` trait all stage nodes implement.
pub mod element;

pub mod errors;

/// Hit-event listener registration and dispatch.
pub mod events;

/// Concrete node implementations.
pub mod node;

/// The render list.
pub mod scene;

/// Surface acquisition, ticking, and snapshots.
pub mod surface;

/// Shared data types (ids, transforms).
pub mod types;

pub use assets::{AssetLoader, FileAssetLoader, HttpAssetLoader};
pub use bootstrap::{bootstrap, BootstrapOptions};
pub use display::{DisplayElement, DisplayRegistry};
pub use element::Renderable;
pub use errors::StageError;
pub use node::Live2DModel;
pub use scene::{Stage, StageNode};
pub use surface::{ResizeTo, Surface, SurfaceOptions};
pub use types::{NodeId, Transform};
