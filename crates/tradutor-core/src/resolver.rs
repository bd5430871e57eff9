//! Query resolution: exact translation first, then the closest known word.

use tradutor_types::{FuzzyFallback, LookupOutcome, WordPair};

use crate::dictionary::Lexicon;
use crate::distance::levenshtein;
use crate::preprocess::normalize;

/// Largest edit distance still offered as a suggestion
pub const SUGGESTION_THRESHOLD: usize = 2;

/// Best word found by the edit-distance scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub distance: usize,
}

/// Scans every pair and returns the column value closest to `query`.
///
/// Within a pair the source column wins ties. Across pairs a later candidate
/// replaces the current best only when strictly closer, so the earliest pair
/// wins ties. `None` only for an empty scan.
pub fn closest_match<'a, I>(query: &str, pairs: I) -> Option<Candidate<'a>>
where
    I: IntoIterator<Item = &'a WordPair>,
{
    let mut best: Option<Candidate<'a>> = None;

    for pair in pairs {
        let source_distance = levenshtein(query, &pair.source);
        let target_distance = levenshtein(query, &pair.target);

        let candidate = if target_distance < source_distance {
            Candidate {
                word: &pair.target,
                distance: target_distance,
            }
        } else {
            Candidate {
                word: &pair.source,
                distance: source_distance,
            }
        };

        if best.is_none_or(|current| candidate.distance < current.distance) {
            best = Some(candidate);
        }
    }

    best
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    fuzzy_fallback: FuzzyFallback,
}

impl Resolver {
    pub fn new(fuzzy_fallback: FuzzyFallback) -> Self {
        Self { fuzzy_fallback }
    }

    /// Resolve a single word against `lexicon`.
    ///
    /// The query is trimmed and lowercased here, so pre-normalized input is
    /// fine too. Never fails: misses come back as `NotFound`.
    pub fn lookup(&self, query: &str, lexicon: &dyn Lexicon) -> LookupOutcome {
        let query = normalize(query);
        if query.is_empty() {
            return LookupOutcome::EmptyInput;
        }

        if let Some(translation) = lexicon.find_exact(&query) {
            tracing::debug!("exact match for '{}': '{}'", query, translation);
            return LookupOutcome::exact(translation);
        }

        if !self.fuzzy_fallback.is_enabled() {
            return LookupOutcome::not_found();
        }

        match closest_match(&query, lexicon.all()) {
            Some(candidate) if candidate.distance <= SUGGESTION_THRESHOLD => {
                tracing::debug!(
                    "suggesting '{}' for '{}' (distance {})",
                    candidate.word,
                    query,
                    candidate.distance
                );
                LookupOutcome::suggested(candidate.word, candidate.distance)
            }
            _ => LookupOutcome::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(rows: &[(&str, &str)]) -> Vec<WordPair> {
        rows.iter().map(|(s, t)| WordPair::new(*s, *t)).collect()
    }

    #[test]
    fn test_exact_beats_near_duplicates() {
        let lex = lexicon(&[("cats", "gatos"), ("cat", "gato"), ("cut", "corte")]);
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("cat", &lex), LookupOutcome::exact("gato"));
    }

    #[test]
    fn test_exact_in_target_column() {
        let lex = lexicon(&[("cat", "gato")]);
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("gato", &lex), LookupOutcome::exact("cat"));
    }

    #[test]
    fn test_suggestion_within_threshold() {
        let lex = lexicon(&[("cta", "gato")]);
        let resolver = Resolver::default();
        // transposition costs two edits
        assert_eq!(resolver.lookup("cat", &lex), LookupOutcome::suggested("cta", 2));
        assert_eq!(resolver.lookup("cas", &lex), LookupOutcome::suggested("cta", 2));
    }

    #[test]
    fn test_single_edit_suggestion() {
        let lex = lexicon(&[("house", "casa")]);
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("hous", &lex), LookupOutcome::suggested("house", 1));
        assert_eq!(resolver.lookup("cassa", &lex), LookupOutcome::suggested("casa", 1));
    }

    #[test]
    fn test_distance_three_is_not_found() {
        let lex = lexicon(&[("dog", "cachorro")]);
        let resolver = Resolver::default();
        assert_eq!(levenshtein("cat", "dog"), 3);
        assert_eq!(resolver.lookup("cat", &lex), LookupOutcome::not_found());
    }

    #[test]
    fn test_ties_keep_earliest_pair() {
        let lex = lexicon(&[("bird", "ave"), ("cold", "frio"), ("card", "cartao")]);
        let resolver = Resolver::default();
        assert_eq!(levenshtein("cord", "cold"), 1);
        assert_eq!(levenshtein("cord", "card"), 1);
        assert_eq!(resolver.lookup("cord", &lex), LookupOutcome::suggested("cold", 1));

        let lex = lexicon(&[("abxy", "zzzz"), ("xyab", "zzzz"), ("abyx", "zzzz")]);
        assert_eq!(levenshtein("abcd", "abxy"), 2);
        assert_eq!(levenshtein("abcd", "abyx"), 2);
        assert_eq!(resolver.lookup("abcd", &lex), LookupOutcome::suggested("abxy", 2));
    }

    #[test]
    fn test_target_column_can_be_suggested() {
        let lex = lexicon(&[("water", "agua")]);
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("agu", &lex), LookupOutcome::suggested("agua", 1));
    }

    #[test]
    fn test_source_wins_tie_within_pair() {
        let pairs = lexicon(&[("ab", "ba")]);
        let best = closest_match("aa", &pairs).unwrap();
        assert_eq!(best, Candidate { word: "ab", distance: 1 });
    }

    #[test]
    fn test_empty_query() {
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("", &lexicon(&[("cat", "gato")])), LookupOutcome::EmptyInput);
        assert_eq!(resolver.lookup("   ", &Vec::<WordPair>::new()), LookupOutcome::EmptyInput);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let lex = lexicon(&[("cat", "gato"), ("house", "casa")]);
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("  Cat ", &lex), resolver.lookup("cat", &lex));
        assert_eq!(resolver.lookup("HOUS\t", &lex), resolver.lookup("hous", &lex));
    }

    #[test]
    fn test_fuzzy_disabled_reports_not_found() {
        let lex = lexicon(&[("house", "casa")]);
        let resolver = Resolver::new(FuzzyFallback::Disabled);
        assert_eq!(resolver.lookup("hous", &lex), LookupOutcome::not_found());
        assert_eq!(resolver.lookup("house", &lex), LookupOutcome::exact("casa"));
    }

    #[test]
    fn test_empty_lexicon() {
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("cat", &Vec::<WordPair>::new()), LookupOutcome::not_found());
        assert_eq!(closest_match("cat", &Vec::<WordPair>::new()), None);
    }

    #[test]
    fn test_empty_fields_take_part_in_matching() {
        // a blank source is at distance len(query)
        let lex = lexicon(&[("", "zzzzzz")]);
        let resolver = Resolver::default();
        assert_eq!(resolver.lookup("ab", &lex), LookupOutcome::suggested("", 2));
    }
}
