use std::collections::HashMap;

use tradutor_core::dictionary::{Lexicon, LexiconMetadata};
use tradutor_types::WordPair;

/// English/Portuguese word list with an exact-match index per column
pub struct BilingualLexicon {
    pairs: Vec<WordPair>,
    english_index: HashMap<String, usize>,
    portuguese_index: HashMap<String, usize>,
}

impl BilingualLexicon {
    pub fn new() -> Self {
        Self::from_pairs(Vec::new())
    }

    /// Build from rows in word list order. Indexes keep the first row for
    /// each word.
    pub fn from_pairs(pairs: Vec<WordPair>) -> Self {
        let mut english_index = HashMap::with_capacity(pairs.len());
        let mut portuguese_index = HashMap::with_capacity(pairs.len());

        for (idx, pair) in pairs.iter().enumerate() {
            english_index.entry(pair.source.clone()).or_insert(idx);
            portuguese_index.entry(pair.target.clone()).or_insert(idx);
        }

        Self {
            pairs,
            english_index,
            portuguese_index,
        }
    }

    /// Get the number of pairs in the lexicon
    pub fn entry_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for BilingualLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for BilingualLexicon {
    fn find_exact(&self, word: &str) -> Option<String> {
        // English index first, then Portuguese
        if let Some(pair) = self.english_index.get(word).and_then(|&i| self.pairs.get(i)) {
            return Some(pair.target.clone());
        }

        self.portuguese_index
            .get(word)
            .and_then(|&i| self.pairs.get(i))
            .map(|pair| pair.source.clone())
    }

    fn all(&self) -> Box<dyn Iterator<Item = &WordPair> + '_> {
        Box::new(self.pairs.iter())
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: "palavras".to_string(),
            source_language: "en".to_string(),
            target_language: "pt".to_string(),
            entry_count: self.pairs.len(),
        }
    }
}
