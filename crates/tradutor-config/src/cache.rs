use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::VarLookup;

fn default_version() -> String {
    "tradutor-cache-v1".to_string()
}

fn default_root() -> String {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradutor")
        .to_string_lossy()
        .into_owned()
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_assets() -> Vec<String> {
    ["/", "/index.html", "/styles.css", "/script.js", "/palavras.csv"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Tag of the live cache generation, older tags are evicted on activate
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_assets")]
    pub assets: Vec<String>,
}

impl CacheConfig {
    pub fn apply_overrides(&mut self, var: VarLookup) {
        if let Some(version) = var("CACHE_VERSION") {
            self.version = version;
        }
        if let Some(root) = var("CACHE_ROOT") {
            self.root = root;
        }
        if let Some(base_url) = var("ASSET_BASE_URL") {
            self.base_url = base_url;
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            root: default_root(),
            base_url: default_base_url(),
            assets: default_assets(),
        }
    }
}
