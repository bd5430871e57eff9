pub mod dictionary;
pub mod loader;
pub mod processor;

pub use dictionary::BilingualLexicon;
pub use loader::{WordListLoader, parse_rows};
pub use processor::EnglishPortugueseProcessor;
