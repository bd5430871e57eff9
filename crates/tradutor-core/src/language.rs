use tradutor_types::LookupOutcome;

use crate::dictionary::Lexicon;

/// Translation interface for a language pair implementation
pub trait LanguageProcessor: Send + Sync {
    /// Language identifiers (ISO 639-1 code: "en", "pt", ...)
    fn language_pair(&self) -> (&str, &str);

    /// Normalize a query or a word list field
    fn normalize(&self, text: &str) -> String;

    /// Translate a single word in either direction
    fn translate(&self, text: &str, lexicon: &dyn Lexicon) -> LookupOutcome;
}
