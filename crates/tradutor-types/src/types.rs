use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One row of the word list. Fields are stored already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// English column
    pub source: String,
    /// Portuguese column
    pub target: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Result of resolving a non-empty query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Exact(String),
    Suggested { word: String, distance: usize },
    NotFound,
}

/// Everything a lookup can produce, including the empty-input prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    EmptyInput,
    Match(MatchResult),
}

impl LookupOutcome {
    pub fn exact(word: impl Into<String>) -> Self {
        Self::Match(MatchResult::Exact(word.into()))
    }

    pub fn suggested(word: impl Into<String>, distance: usize) -> Self {
        Self::Match(MatchResult::Suggested {
            word: word.into(),
            distance,
        })
    }

    pub fn not_found() -> Self {
        Self::Match(MatchResult::NotFound)
    }
}

/// Whether a miss in the exact phase falls through to the edit-distance scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuzzyFallback {
    #[default]
    Enabled,
    Disabled,
}

impl FuzzyFallback {
    pub fn is_enabled(self) -> bool {
        matches!(self, FuzzyFallback::Enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fuzzy fallback setting: {0:?}")]
pub struct ParseFuzzyFallbackError(pub String);

impl FromStr for FuzzyFallback {
    type Err = ParseFuzzyFallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enabled" | "true" | "on" | "1" => Ok(FuzzyFallback::Enabled),
            "disabled" | "false" | "off" | "0" => Ok(FuzzyFallback::Disabled),
            _ => Err(ParseFuzzyFallbackError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A query typed by the user
    TextInput(String),
    ShowResult(DisplayResult),
    SyncRequested,
    SyncFinished {
        pairs: usize,
    },
    StatusUpdate(String),
    BackendReady,
    Quit,
}

#[derive(Debug, Clone)]
pub struct DisplayResult {
    pub query: String,
    pub outcome: LookupOutcome,
}
