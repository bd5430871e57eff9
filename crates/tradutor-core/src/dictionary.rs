use std::path::Path;

use tradutor_types::WordPair;

/// Read-only view over a bilingual word list
pub trait Lexicon: Send + Sync {
    /// Translation of `word`, looking at the source column first and only then
    /// at the target column
    fn find_exact(&self, word: &str) -> Option<String>;

    /// Every pair in insertion order. Can be called again for a fresh scan
    fn all(&self) -> Box<dyn Iterator<Item = &WordPair> + '_>;

    /// Get lexicon metadata
    fn metadata(&self) -> LexiconMetadata;
}

/// Plain ordered list, exact lookups are linear scans
impl Lexicon for Vec<WordPair> {
    fn find_exact(&self, word: &str) -> Option<String> {
        self.iter()
            .find(|pair| pair.source == word)
            .map(|pair| pair.target.clone())
            .or_else(|| {
                self.iter()
                    .find(|pair| pair.target == word)
                    .map(|pair| pair.source.clone())
            })
    }

    fn all(&self) -> Box<dyn Iterator<Item = &WordPair> + '_> {
        Box::new(self.iter())
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: "list".to_string(),
            source_language: String::new(),
            target_language: String::new(),
            entry_count: self.len(),
        }
    }
}

/// Turns a word list file into normalized rows
pub trait LexiconLoader {
    /// Load rows from file path
    fn load_from_file(&self, path: &Path) -> Result<Vec<WordPair>, LoadError>;

    /// Parse rows from already fetched text
    fn load_from_str(&self, text: &str) -> Result<Vec<WordPair>, LoadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconMetadata {
    pub name: String,
    pub source_language: String,
    pub target_language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
