use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::VarLookup;

fn default_database_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradutor")
        .join("tradutor.db")
        .to_string_lossy()
        .into_owned()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl StoreConfig {
    pub fn apply_overrides(&mut self, var: VarLookup) {
        if let Some(path) = var("TRADUTOR_DB") {
            self.database_path = path;
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}
