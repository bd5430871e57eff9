//! Versioned offline copy of the static assets.
//!
//! Each cache generation lives in `<root>/<version>/`, one file per asset.
//! `install` fills a generation, `match_asset` reads from it and `activate`
//! drops every other generation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::fetch::FetchError;

/// Network side of the cache
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch_asset(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct HttpAssetSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssetSource {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch_asset(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: FetchError,
    },
}

pub struct AssetCache {
    root: PathBuf,
    version: String,
    assets: Vec<String>,
}

impl AssetCache {
    pub fn new(root: impl Into<PathBuf>, version: impl Into<String>, assets: Vec<String>) -> Self {
        Self {
            root: root.into(),
            version: version.into(),
            assets,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    fn generation_dir(&self) -> PathBuf {
        self.root.join(&self.version)
    }

    fn staging_dir(&self) -> PathBuf {
        self.root.join(format!(".{}-staging", self.version))
    }

    /// Fetch every asset into a fresh generation. Nothing is kept unless all
    /// of them arrive.
    pub async fn install(&self, source: &dyn AssetSource) -> Result<usize, CacheError> {
        let staging = self.staging_dir();
        remove_dir_if_exists(&staging).await?;
        tokio::fs::create_dir_all(&staging).await?;

        for asset in &self.assets {
            let bytes = match source.fetch_asset(asset).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Cache install aborted, {} unavailable: {}", asset, e);
                    remove_dir_if_exists(&staging).await?;
                    return Err(CacheError::Fetch {
                        path: asset.clone(),
                        source: e,
                    });
                }
            };
            tokio::fs::write(staging.join(cache_key(asset)), bytes).await?;
        }

        let target = self.generation_dir();
        remove_dir_if_exists(&target).await?;
        tokio::fs::rename(&staging, &target).await?;

        tracing::info!("Cached {} assets in {}", self.assets.len(), self.version);
        Ok(self.assets.len())
    }

    /// Cached bytes for `path` in the current generation
    pub async fn match_asset(&self, path: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match tokio::fs::read(self.generation_dir().join(cache_key(path))).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Cache first, network otherwise
    pub async fn fetch(&self, path: &str, source: &dyn AssetSource) -> Result<Vec<u8>, CacheError> {
        if let Some(bytes) = self.match_asset(path).await? {
            tracing::debug!("Cache hit: {}", path);
            return Ok(bytes);
        }

        tracing::debug!("Cache miss: {}", path);
        source
            .fetch_asset(path)
            .await
            .map_err(|e| CacheError::Fetch {
                path: path.to_string(),
                source: e,
            })
    }

    /// Delete every generation other than the current one. Returns the
    /// evicted names.
    pub async fn activate(&self) -> Result<Vec<String>, CacheError> {
        let mut evicted = Vec::new();

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(evicted),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == self.version {
                continue;
            }

            tokio::fs::remove_dir_all(entry.path()).await?;
            tracing::info!("Evicted stale cache {}", name);
            evicted.push(name);
        }

        evicted.sort();
        Ok(evicted)
    }
}

/// File name for an asset path
fn cache_key(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return "index".to_string();
    }

    let key: String = trimmed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if key.starts_with('.') { format!("_{key}") } else { key }
}

async fn remove_dir_if_exists(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
