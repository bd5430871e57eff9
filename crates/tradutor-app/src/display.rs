use tradutor_types::{DisplayResult, LookupOutcome, MatchResult};

/// Line shown to the user for a lookup
pub fn render(result: &DisplayResult) -> String {
    match &result.outcome {
        LookupOutcome::EmptyInput => "Please enter a word".to_string(),
        LookupOutcome::Match(MatchResult::Exact(word)) => format!("Translation: {word}"),
        LookupOutcome::Match(MatchResult::Suggested { word, .. }) => {
            format!("Did you mean: {word}?")
        }
        LookupOutcome::Match(MatchResult::NotFound) => "Translation not found".to_string(),
    }
}
