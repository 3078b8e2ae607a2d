use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A parsed model descriptor in either of the two Cubism JSON formats.
///
/// The loader does not ask callers which format a URL points at: the set of
/// formats is closed and [`ModelJson::from_slice`] resolves the variant by
/// sniffing the document shape.
#[derive(Debug, Clone)]
pub enum ModelJson {
    /// Classic `*.model.json` (Cubism 2.x).
    Cubism2(Cubism2Model),
    /// `*.model3.json` (Cubism 3/4).
    Cubism4(Cubism4Model),
}

impl ModelJson {
    /// Parses raw descriptor bytes, detecting the format variant.
    ///
    /// A `FileReferences` section marks the Cubism 4 family; everything else
    /// is treated as a classic Cubism 2 descriptor.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if value.get("FileReferences").is_some() {
            serde_json::from_value::<Cubism4Model>(value).map(ModelJson::Cubism4)
        } else {
            serde_json::from_value::<Cubism2Model>(value).map(ModelJson::Cubism2)
        }
    }
}

// --- Cubism 2 (`*.model.json`) ---

/// Root of a classic `model.json` descriptor.
///
/// All file fields are paths relative to the descriptor's own location.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism2Model {
    #[serde(default)]
    pub version: Option<String>,
    /// The moc file (opaque binary owned by the Cubism core).
    pub model: String,
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub physics: Option<String>,
    #[serde(default)]
    pub pose: Option<String>,
    #[serde(default)]
    pub expressions: Vec<Cubism2Expression>,
    #[serde(default)]
    pub layout: Option<HashMap<String, f32>>,
    #[serde(default)]
    pub hit_areas: Vec<Cubism2HitArea>,
    /// Motion groups: group name (e.g. `"idle"`, `"tap_body"`) to entries.
    #[serde(default)]
    pub motions: HashMap<String, Vec<Cubism2Motion>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism2Expression {
    pub name: String,
    pub file: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism2HitArea {
    /// The name reported in hit events (e.g. `"body"`).
    pub name: String,
    /// The drawable id inside the moc this area maps to.
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism2Motion {
    pub file: String,
    #[serde(default)]
    pub sound: Option<String>,
    /// Fade-in time in milliseconds.
    #[serde(default)]
    pub fade_in: Option<f32>,
    /// Fade-out time in milliseconds.
    #[serde(default)]
    pub fade_out: Option<f32>,
}

// --- Cubism 4 (`*.model3.json`) ---

/// Root of a `model3.json` descriptor.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism4Model {
    #[serde(rename = "Version", default)]
    pub version: Option<u32>,
    #[serde(rename = "FileReferences")]
    pub file_references: Cubism4FileReferences,
    #[serde(rename = "Groups", default)]
    pub groups: Vec<Cubism4Group>,
    #[serde(rename = "HitAreas", default)]
    pub hit_areas: Vec<Cubism4HitArea>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism4FileReferences {
    #[serde(rename = "Moc")]
    pub moc: String,
    #[serde(rename = "Textures", default)]
    pub textures: Vec<String>,
    #[serde(rename = "Physics", default)]
    pub physics: Option<String>,
    #[serde(rename = "Pose", default)]
    pub pose: Option<String>,
    #[serde(rename = "DisplayInfo", default)]
    pub display_info: Option<String>,
    #[serde(rename = "Expressions", default)]
    pub expressions: Vec<Cubism4Expression>,
    #[serde(rename = "Motions", default)]
    pub motions: HashMap<String, Vec<Cubism4Motion>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism4Expression {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "File")]
    pub file: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism4Motion {
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "Sound", default)]
    pub sound: Option<String>,
    /// Fade-in time in seconds.
    #[serde(rename = "FadeInTime", default)]
    pub fade_in_time: Option<f32>,
    /// Fade-out time in seconds.
    #[serde(rename = "FadeOutTime", default)]
    pub fade_out_time: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism4Group {
    #[serde(rename = "Target", default)]
    pub target: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Ids", default)]
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cubism4HitArea {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}
