use std::path::Path;

use tradutor_core::dictionary::{LexiconLoader, LoadError};
use tradutor_core::preprocess::normalize;
use tradutor_types::WordPair;

/// Parse the comma-separated word list.
///
/// One pair per line, English first then Portuguese, no header. Both fields
/// are trimmed and lowercased; extra columns are ignored. Lines without two
/// non-empty fields (blank lines included) are skipped.
pub fn parse_rows(text: &str) -> Vec<WordPair> {
    let mut rows = Vec::new();

    for (line_no, line) in text.split('\n').enumerate() {
        let mut columns = line.split(',');
        let english = columns.next().map(normalize).unwrap_or_default();
        let portuguese = columns.next().map(normalize).unwrap_or_default();

        if english.is_empty() || portuguese.is_empty() {
            if !line.trim().is_empty() {
                tracing::debug!("Skipping malformed row {}: '{}'", line_no + 1, line.trim());
            }
            continue;
        }

        rows.push(WordPair::new(english, portuguese));
    }

    rows
}

pub struct WordListLoader;

impl LexiconLoader for WordListLoader {
    fn load_from_file(&self, path: &Path) -> Result<Vec<WordPair>, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading word list from file: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        self.load_from_str(&text)
    }

    fn load_from_str(&self, text: &str) -> Result<Vec<WordPair>, LoadError> {
        let rows = parse_rows(text);

        // Something came back but none of it looks like a word list
        if rows.is_empty() && !text.trim().is_empty() {
            return Err(LoadError::InvalidFormat(
                "no line has two comma-separated words".to_string(),
            ));
        }

        tracing::info!("Parsed {} word pairs", rows.len());
        Ok(rows)
    }
}
