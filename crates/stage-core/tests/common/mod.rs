//! Shared fixtures: an in-memory asset loader and tiny model bundles.
#![allow(dead_code)]

use async_trait::async_trait;
use stage_core::{AssetLoader, DisplayElement, DisplayRegistry, StageError};
use std::collections::HashMap;

/// In-memory loader; anything not inserted fails like a 404.
#[derive(Default)]
pub struct StubLoader {
    files: HashMap<String, Vec<u8>>,
}

impl StubLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: &str, bytes: Vec<u8>) {
        self.files.insert(url.to_string(), bytes);
    }

    pub fn remove(&mut self, url: &str) {
        self.files.remove(url);
    }
}

#[async_trait]
impl AssetLoader for StubLoader {
    async fn load_bytes(&self, url: &str) -> Result<Vec<u8>, StageError> {
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| StageError::AssetNotFound(url.to_string()))
    }
}

/// Encodes a solid-color PNG in memory.
pub fn png_texture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 120, 180, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("png encode");
    buf.into_inner()
}

pub const SHIZUKU_URL: &str = "shizuku/shizuku.model.json";
pub const HARU_URL: &str = "haru/haru.model3.json";

/// A complete Cubism 2 bundle under `shizuku/`.
pub fn insert_shizuku_bundle(loader: &mut StubLoader) {
    let descriptor = serde_json::json!({
        "version": "Sample 1.0.0",
        "model": "shizuku.moc",
        "textures": ["texture_00.png"],
        "hit_areas": [
            { "name": "head", "id": "D_REF.HEAD" },
            { "name": "body", "id": "D_REF.BODY" }
        ],
        "motions": {
            "idle": [{ "file": "motions/idle_00.mtn", "fade_in": 2000, "fade_out": 2000 }],
            "tap_body": [
                { "file": "motions/tapBody_00.mtn", "sound": "sounds/tapBody_00.mp3" },
                { "file": "motions/tapBody_01.mtn" }
            ]
        }
    });
    loader.insert(SHIZUKU_URL, descriptor.to_string().into_bytes());
    loader.insert("shizuku/shizuku.moc", b"MOC2\x00fake".to_vec());
    loader.insert("shizuku/texture_00.png", png_texture(64, 64));
}

/// A complete Cubism 4 bundle under `haru/`.
pub fn insert_haru_bundle(loader: &mut StubLoader) {
    let descriptor = serde_json::json!({
        "Version": 3,
        "FileReferences": {
            "Moc": "haru.moc3",
            "Textures": ["texture_00.png"],
            "Motions": {
                "Idle": [{ "File": "motions/idle.motion3.json", "FadeInTime": 0.5, "FadeOutTime": 0.5 }],
                "TapBody": [{ "File": "motions/tap.motion3.json" }]
            }
        },
        "HitAreas": [{ "Id": "HitArea", "Name": "Body" }]
    });
    loader.insert(HARU_URL, descriptor.to_string().into_bytes());
    loader.insert("haru/haru.moc3", b"MOC3\x00fake".to_vec());
    loader.insert("haru/texture_00.png", png_texture(32, 32));
}

/// A registry exposing the `"pio"` element inside a 1280x720 viewport.
pub fn registry_with_pio() -> DisplayRegistry {
    let mut registry = DisplayRegistry::new(1280, 720);
    registry.register(DisplayElement::new("pio", 800, 600));
    registry
}
