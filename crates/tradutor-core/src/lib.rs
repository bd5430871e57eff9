pub mod dictionary;
pub mod distance;
pub mod language;
pub mod preprocess;
pub mod resolver;
pub mod state;

pub use dictionary::{Lexicon, LexiconLoader, LexiconMetadata, LoadError};
pub use distance::levenshtein;
pub use resolver::{Candidate, Resolver, SUGGESTION_THRESHOLD, closest_match};
pub use state::LexiconState;
