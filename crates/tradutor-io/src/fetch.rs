use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

/// Somewhere the raw comma-separated word list can be read from
#[async_trait]
pub trait WordListSource: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub struct HttpWordListSource {
    client: reqwest::Client,
    url: String,
}

impl HttpWordListSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl WordListSource for HttpWordListSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub struct FileWordListSource {
    path: PathBuf,
}

impl FileWordListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WordListSource for FileWordListSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
