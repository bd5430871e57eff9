pub trait Preprocessor {
    // Default word preprocessor: trim and fold case
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Shorthand for [`DefaultPreprocessor`]
pub fn normalize(text: &str) -> String {
    DefaultPreprocessor.process(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Cat \n"), "cat");
        assert_eq!(normalize("CORAÇÃO"), "coração");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  Olá Mundo ");
        assert_eq!(normalize(&once), once);
    }
}
