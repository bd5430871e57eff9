use serde::{Deserialize, Serialize};
use tradutor_types::FuzzyFallback;

use crate::VarLookup;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Suggest the closest word when there is no exact translation
    pub fuzzy_fallback: FuzzyFallback,
    /// Local CSV used instead of the network word list
    pub word_list_path: Option<String>,
}

impl LexiconConfig {
    pub fn apply_overrides(&mut self, var: VarLookup) {
        if let Some(Ok(fuzzy)) = var("FUZZY_FALLBACK").map(|v| v.parse::<FuzzyFallback>()) {
            self.fuzzy_fallback = fuzzy;
        }
        if let Some(path) = var("WORD_LIST_PATH") {
            self.word_list_path = Some(path);
        }
    }
}
