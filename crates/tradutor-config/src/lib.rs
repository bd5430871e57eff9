use std::env;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::lexicon::LexiconConfig;
use self::network::NetworkConfig;
use self::store::StoreConfig;

pub mod cache;
pub mod lexicon;
pub mod network;
pub mod store;

/// Looks up one override by variable name
pub type VarLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn default_sync_interval_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lexicon: LexiconConfig,
    pub network: NetworkConfig,
    pub store: StoreConfig,
    pub cache: CacheConfig,

    /// Seconds between background resyncs of the word list, 0 disables
    #[serde(default = "default_sync_interval_secs")]
    pub sync_interval_secs: u64,
}

impl Config {
    /// Environment variables win over whatever was loaded from a profile
    pub fn apply_env(&mut self) {
        self.apply_overrides(&|name| env::var(name).ok().filter(|v| !v.is_empty()));
    }

    pub fn apply_overrides(&mut self, var: VarLookup) {
        self.lexicon.apply_overrides(var);
        self.network.apply_overrides(var);
        self.store.apply_overrides(var);
        self.cache.apply_overrides(var);

        if let Some(secs) = var("SYNC_INTERVAL_SECS").and_then(|v| v.parse().ok()) {
            self.sync_interval_secs = secs;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: LexiconConfig::default(),
            network: NetworkConfig::default(),
            store: StoreConfig::default(),
            cache: CacheConfig::default(),
            sync_interval_secs: default_sync_interval_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tradutor_types::FuzzyFallback;

    use super::*;

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "sync_interval_secs": 0 }"#).unwrap();
        assert_eq!(config.sync_interval_secs, 0);
        assert!(config.lexicon.fuzzy_fallback.is_enabled());
        assert_eq!(config.cache.version, "tradutor-cache-v1");
    }

    #[test]
    fn test_fuzzy_flag_deserializes_lowercase() {
        let config: Config =
            serde_json::from_str(r#"{ "lexicon": { "fuzzy_fallback": "disabled" } }"#).unwrap();
        assert!(!config.lexicon.fuzzy_fallback.is_enabled());
    }

    #[test]
    fn test_overrides_win_over_saved_profile() {
        let mut config: Config = serde_json::from_str(
            r#"{
                "lexicon": { "fuzzy_fallback": "enabled" },
                "network": { "word_list_url": "http://saved/palavras.csv" },
                "store": { "database_path": "/saved/tradutor.db" },
                "sync_interval_secs": 60
            }"#,
        )
        .unwrap();

        let vars = HashMap::from([
            ("FUZZY_FALLBACK", "off"),
            ("WORD_LIST_URL", "http://env/palavras.csv"),
            ("TRADUTOR_DB", "/env/tradutor.db"),
        ]);
        config.apply_overrides(&|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.lexicon.fuzzy_fallback, FuzzyFallback::Disabled);
        assert_eq!(config.network.word_list_url, "http://env/palavras.csv");
        assert_eq!(config.store.database_path, "/env/tradutor.db");
        // Unset variables leave the profile alone
        assert_eq!(config.sync_interval_secs, 60);
        assert_eq!(config.network.timeout_seconds, 30);
    }

    #[test]
    fn test_unparsable_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(&|name| match name {
            "FUZZY_FALLBACK" => Some("sometimes".to_string()),
            "SYNC_INTERVAL_SECS" => Some("soon".to_string()),
            _ => None,
        });

        assert!(config.lexicon.fuzzy_fallback.is_enabled());
        assert_eq!(config.sync_interval_secs, 300);
    }
}
