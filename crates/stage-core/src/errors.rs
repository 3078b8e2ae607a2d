use thiserror::Error;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("Display element not found: {0}")]
    DisplayElementNotFound(String),
    #[error("Failed to create surface")]
    SurfaceFailure,
    #[error("Asset fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
    #[error("Malformed model descriptor: {0}")]
    MalformedDescriptor(#[from] serde_json::Error),
    #[error("Failed to decode texture: {0}")]
    TextureDecode(String),
    #[error("Graphics error: {0}")]
    Graphics(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
