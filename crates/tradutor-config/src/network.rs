use serde::{Deserialize, Serialize};

use crate::VarLookup;

fn default_word_list_url() -> String {
    "http://localhost:8000/palavras.csv".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Where the comma-separated word list is published
    #[serde(default = "default_word_list_url")]
    pub word_list_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn apply_overrides(&mut self, var: VarLookup) {
        if let Some(url) = var("WORD_LIST_URL") {
            self.word_list_url = url;
        }
        if let Some(secs) = var("TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.timeout_seconds = secs;
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            word_list_url: default_word_list_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
