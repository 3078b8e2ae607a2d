use crate::assets::AssetLoader;
use crate::element::Renderable;
use crate::errors::StageError;
use crate::events::{HitListener, HitListeners};
use live2d_core::{HitBounds, HitTester, ModelSettings, MotionManager, MotionPriority};
use live2d_data::model::ModelJson;
use skia_safe::{Canvas, Color4f, Data, FilterMode, Image, MipmapMode, Paint, Rect, SamplingOptions};
use std::any::Any;
use tracing::{debug, info};

/// An animated character instance loaded from a remote model descriptor.
///
/// The loader resolves the whole co-located bundle (descriptor, moc,
/// textures) before the model exists, so a model in the render list is always
/// fully loaded. The moc stays an opaque blob: mesh deformation belongs to
/// the Cubism core, and this node draws the texture atlas as its stand-in.
pub struct Live2DModel {
    settings: ModelSettings,
    motions: MotionManager,
    hits: HitTester,
    moc: Vec<u8>,
    textures: Vec<Image>,
    listeners: HitListeners,
    size: (f32, f32),
}

impl Live2DModel {
    /// Resolves a model by descriptor URL.
    ///
    /// Suspends until the descriptor and every referenced asset is fetched
    /// and parsed. Any network or parse failure propagates; nothing is
    /// retried and no partially-loaded model is ever returned.
    pub async fn from(loader: &dyn AssetLoader, url: &str) -> Result<Self, StageError> {
        let bytes = loader.load_bytes(url).await?;
        let json = ModelJson::from_slice(&bytes)?;
        let settings = ModelSettings::new(url, json);

        let moc = loader.load_bytes(&settings.resolve(settings.moc_file())).await?;

        let mut textures = Vec::with_capacity(settings.textures().len());
        for tex in settings.textures() {
            let tex_bytes = loader.load_bytes(&settings.resolve(tex)).await?;
            let image = Image::from_encoded(Data::new_copy(&tex_bytes))
                .ok_or_else(|| StageError::TextureDecode(tex.clone()))?;
            textures.push(image);
        }

        let size = textures
            .first()
            .map_or((0.0, 0.0), |t| (t.width() as f32, t.height() as f32));

        let motions = MotionManager::new(&settings);
        let hits = HitTester::new(&settings);
        info!(
            model = settings.name(),
            textures = textures.len(),
            moc_bytes = moc.len(),
            "model loaded"
        );

        Ok(Self {
            settings,
            motions,
            hits,
            moc,
            textures,
            listeners: HitListeners::new(),
            size,
        })
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn motions(&self) -> &MotionManager {
        &self.motions
    }

    pub fn motions_mut(&mut self) -> &mut MotionManager {
        &mut self.motions
    }

    /// The raw moc blob (owned by the Cubism core, never inspected here).
    pub fn moc(&self) -> &[u8] {
        &self.moc
    }

    /// Registers bounds for a named hit region, in model-local coordinates.
    pub fn set_hit_bounds(&mut self, name: &str, bounds: HitBounds) -> bool {
        self.hits.set_bounds(name, bounds)
    }

    /// Triggers a named motion group at normal priority.
    ///
    /// Undefined groups are ignored (the name vocabulary belongs to the
    /// descriptor); returns whether a motion actually started.
    pub fn motion(&mut self, group: &str) -> bool {
        let started = self
            .motions
            .start_motion(group, None, MotionPriority::Normal);
        if !started {
            debug!(group, "motion not started");
        }
        started
    }

    /// Registers a hit listener. Listeners persist for the model's lifetime.
    pub fn on_hit<F>(&mut self, listener: F)
    where
        F: FnMut(&[String], &mut MotionManager) + 'static,
    {
        self.listeners.push(Box::new(listener) as HitListener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers one hit event to every registered listener.
    pub fn emit_hit(&mut self, hit_areas: &[String]) {
        // Listeners get mutable access to the motion manager, so they are
        // taken out for the duration of the dispatch.
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.emit(hit_areas, &mut self.motions);
        self.listeners = listeners;
    }
}

impl Renderable for Live2DModel {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn size(&self) -> (f32, f32) {
        self.size
    }

    fn update(&mut self, dt: f64) -> bool {
        self.motions.update(dt as f32);
        self.motions.is_playing()
    }

    fn render(&self, canvas: &Canvas, opacity: f32) -> Result<(), StageError> {
        if opacity <= 0.0 {
            return Ok(());
        }
        let Some(atlas) = self.textures.first() else {
            return Ok(());
        };

        let mut paint = Paint::new(Color4f::new(1.0, 1.0, 1.0, opacity), None);
        paint.set_anti_alias(true);
        let sampling = SamplingOptions::new(FilterMode::Linear, MipmapMode::Linear);
        let dest = Rect::from_wh(self.size.0, self.size.1);

        canvas.draw_image_rect_with_sampling_options(atlas, None, dest, sampling, &paint);
        Ok(())
    }

    fn hit_test(&self, x: f32, y: f32) -> Vec<String> {
        self.hits.test(x, y)
    }

    fn handle_tap(&mut self, x: f32, y: f32) {
        let hit_areas = self.hit_test(x, y);
        if !hit_areas.is_empty() {
            self.emit_hit(&hit_areas);
        }
    }
}

impl std::fmt::Debug for Live2DModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Live2DModel")
            .field("name", &self.settings.name())
            .field("textures", &self.textures.len())
            .field("listeners", &self.listeners.len())
            .field("size", &self.size)
            .finish()
    }
}
