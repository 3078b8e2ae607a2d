use live2d_data::model::ModelJson;
use std::collections::HashMap;

/// Default fade length applied when a motion entry does not specify one.
pub const DEFAULT_FADE_SECONDS: f32 = 1.0;

/// A single motion entry inside a named group, normalized across formats.
///
/// Fade times are always in seconds (Cubism 2 descriptors store milliseconds).
#[derive(Debug, Clone, PartialEq)]
pub struct MotionRef {
    /// Motion file path, relative to the descriptor (opaque: `.mtn` or `.motion3.json`).
    pub file: String,
    /// Optional sound file to play alongside the motion.
    pub sound: Option<String>,
    pub fade_in: f32,
    pub fade_out: f32,
}

/// A named hit region declared in the descriptor metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct HitAreaRef {
    /// The name reported in hit events (e.g. `"body"`).
    pub name: String,
    /// The drawable id inside the moc (geometry stays in the Cubism core).
    pub id: String,
}

/// A unified, format-independent view over a parsed model descriptor.
///
/// All relative file references resolve against the descriptor's own URL, so
/// co-located assets (moc, textures, motions) can be fetched from the same
/// place the descriptor came from.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    url: String,
    base: String,
    name: String,
    moc: String,
    textures: Vec<String>,
    motions: HashMap<String, Vec<MotionRef>>,
    hit_areas: Vec<HitAreaRef>,
}

impl ModelSettings {
    pub fn new(url: &str, json: ModelJson) -> Self {
        let base = match url.rfind('/') {
            Some(idx) => url[..=idx].to_string(),
            None => String::new(),
        };
        let name = url
            .rsplit('/')
            .next()
            .unwrap_or(url)
            .trim_end_matches(".model3.json")
            .trim_end_matches(".model.json")
            .trim_end_matches(".json")
            .to_string();

        let (moc, textures, motions, hit_areas) = match json {
            ModelJson::Cubism2(m) => {
                let motions = m
                    .motions
                    .into_iter()
                    .map(|(group, entries)| {
                        let entries = entries
                            .into_iter()
                            .map(|e| MotionRef {
                                file: e.file,
                                sound: e.sound,
                                // Cubism 2 stores fade times in milliseconds.
                                fade_in: e
                                    .fade_in
                                    .map_or(DEFAULT_FADE_SECONDS, |ms| ms / 1000.0),
                                fade_out: e
                                    .fade_out
                                    .map_or(DEFAULT_FADE_SECONDS, |ms| ms / 1000.0),
                            })
                            .collect();
                        (group, entries)
                    })
                    .collect();
                let hit_areas = m
                    .hit_areas
                    .into_iter()
                    .map(|h| HitAreaRef {
                        name: h.name,
                        id: h.id,
                    })
                    .collect();
                (m.model, m.textures, motions, hit_areas)
            }
            ModelJson::Cubism4(m) => {
                let refs = m.file_references;
                let motions = refs
                    .motions
                    .into_iter()
                    .map(|(group, entries)| {
                        let entries = entries
                            .into_iter()
                            .map(|e| MotionRef {
                                file: e.file,
                                sound: e.sound,
                                fade_in: e.fade_in_time.unwrap_or(DEFAULT_FADE_SECONDS),
                                fade_out: e.fade_out_time.unwrap_or(DEFAULT_FADE_SECONDS),
                            })
                            .collect();
                        (group, entries)
                    })
                    .collect();
                let hit_areas = m
                    .hit_areas
                    .into_iter()
                    .map(|h| HitAreaRef {
                        name: h.name,
                        id: h.id,
                    })
                    .collect();
                (refs.moc, refs.textures, motions, hit_areas)
            }
        };

        Self {
            url: url.to_string(),
            base,
            name,
            moc,
            textures,
            motions,
            hit_areas,
        }
    }

    /// The URL the descriptor was loaded from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display name derived from the descriptor file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The moc file reference (relative).
    pub fn moc_file(&self) -> &str {
        &self.moc
    }

    /// Texture file references (relative), in atlas order.
    pub fn textures(&self) -> &[String] {
        &self.textures
    }

    pub fn hit_areas(&self) -> &[HitAreaRef] {
        &self.hit_areas
    }

    pub fn hit_area_names(&self) -> impl Iterator<Item = &str> {
        self.hit_areas.iter().map(|h| h.name.as_str())
    }

    /// Entries of a named motion group, or `None` when the group is undefined.
    pub fn motion_group(&self, group: &str) -> Option<&[MotionRef]> {
        self.motions.get(group).map(|v| v.as_slice())
    }

    pub fn motion_groups(&self) -> impl Iterator<Item = &str> {
        self.motions.keys().map(|k| k.as_str())
    }

    /// The conventional idle group, if the descriptor defines one
    /// (`"idle"` in Cubism 2 descriptors, `"Idle"` in Cubism 4).
    pub fn idle_group(&self) -> Option<&str> {
        ["idle", "Idle"]
            .into_iter()
            .find(|g| self.motions.contains_key(*g))
    }

    /// Resolves a descriptor-relative file reference to a fetchable URL.
    ///
    /// Absolute URLs and absolute paths pass through untouched.
    pub fn resolve(&self, path: &str) -> String {
        if path.contains("://") || path.starts_with('/') {
            path.to_string()
        } else {
            format!("{}{}", self.base, path)
        }
    }

    pub(crate) fn motions(&self) -> &HashMap<String, Vec<MotionRef>> {
        &self.motions
    }
}
