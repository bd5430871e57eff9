use tradutor_core::dictionary::Lexicon;
use tradutor_core::language::LanguageProcessor;
use tradutor_core::preprocess::{DefaultPreprocessor, Preprocessor};
use tradutor_core::resolver::Resolver;
use tradutor_types::{FuzzyFallback, LookupOutcome};

/// English <-> Portuguese word processor
pub struct EnglishPortugueseProcessor {
    resolver: Resolver,
}

impl EnglishPortugueseProcessor {
    pub fn new(fuzzy_fallback: FuzzyFallback) -> Self {
        Self {
            resolver: Resolver::new(fuzzy_fallback),
        }
    }
}

impl Default for EnglishPortugueseProcessor {
    fn default() -> Self {
        Self::new(FuzzyFallback::default())
    }
}

impl LanguageProcessor for EnglishPortugueseProcessor {
    fn language_pair(&self) -> (&str, &str) {
        ("en", "pt")
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn translate(&self, text: &str, lexicon: &dyn Lexicon) -> LookupOutcome {
        let query = self.normalize(text);
        tracing::debug!("Translating '{}'", query);
        self.resolver.lookup(&query, lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::BilingualLexicon;
    use crate::loader::parse_rows;

    const WORDS: &str = "cat,gato\ndog,cachorro\nhouse,casa\nbook,livro\n";

    #[test]
    fn test_translate_both_directions() {
        let lexicon = BilingualLexicon::from_pairs(parse_rows(WORDS));
        let processor = EnglishPortugueseProcessor::default();
        assert_eq!(processor.translate("Dog", &lexicon), LookupOutcome::exact("cachorro"));
        assert_eq!(processor.translate(" livro ", &lexicon), LookupOutcome::exact("book"));
    }

    #[test]
    fn test_translate_suggests_close_word() {
        let lexicon = BilingualLexicon::from_pairs(parse_rows(WORDS));
        let processor = EnglishPortugueseProcessor::default();
        assert_eq!(processor.translate("cachoro", &lexicon), LookupOutcome::suggested("cachorro", 1));
        assert_eq!(processor.translate("elephant", &lexicon), LookupOutcome::not_found());
        assert_eq!(processor.translate("", &lexicon), LookupOutcome::EmptyInput);
    }

    #[test]
    fn test_exact_only_mode() {
        let lexicon = BilingualLexicon::from_pairs(parse_rows(WORDS));
        let processor = EnglishPortugueseProcessor::new(FuzzyFallback::Disabled);
        assert_eq!(processor.translate("cachoro", &lexicon), LookupOutcome::not_found());
        assert_eq!(processor.language_pair(), ("en", "pt"));
    }
}
