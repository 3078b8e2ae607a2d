use crate::errors::StageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Strategy for resolving asset URLs to bytes.
///
/// Model bundles are fetched through this seam so the engine can run against
/// a CDN, the local filesystem, or a test stub. Failures propagate to the
/// caller unchanged; no implementation retries.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Loads the raw bytes behind the given URL or path.
    async fn load_bytes(&self, url: &str) -> Result<Vec<u8>, StageError>;
}

/// HTTP(S) loader backed by [`reqwest`] with a naive in-memory byte cache.
///
/// Model bundles reference the same textures across reloads; the cache keeps
/// repeated loads off the network. Nothing is ever evicted.
pub struct HttpAssetLoader {
    client: reqwest::Client,
    cache: Mutex<HashMap<String, Vec<u8>>>,
}

impl HttpAssetLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for HttpAssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetLoader for HttpAssetLoader {
    async fn load_bytes(&self, url: &str) -> Result<Vec<u8>, StageError> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(bytes) = cache.get(url) {
                debug!(url, "asset cache hit");
                return Ok(bytes.clone());
            }
        }

        debug!(url, "fetching asset");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?.to_vec();

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(url.to_string(), bytes.clone());
        }
        Ok(bytes)
    }
}

/// Filesystem loader for local bundles and tests.
///
/// Treats URLs as paths relative to `root` (absolute paths pass through).
pub struct FileAssetLoader {
    root: PathBuf,
}

impl FileAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetLoader for FileAssetLoader {
    async fn load_bytes(&self, url: &str) -> Result<Vec<u8>, StageError> {
        let path = {
            let p = PathBuf::from(url);
            if p.is_absolute() {
                p
            } else {
                self.root.join(p)
            }
        };
        debug!(path = %path.display(), "reading asset");
        std::fs::read(&path)
            .map_err(|_| StageError::AssetNotFound(path.display().to_string()))
    }
}
