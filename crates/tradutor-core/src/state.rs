use std::sync::Arc;

use tokio::sync::RwLock;
use tradutor_types::WordPair;

use crate::dictionary::Lexicon;

/// Holds the live lexicon. Replacing swaps the whole `Arc`, readers keep the
/// snapshot they took.
pub struct LexiconState {
    current: RwLock<Arc<dyn Lexicon>>,
}

impl LexiconState {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            current: RwLock::new(lexicon),
        }
    }

    pub async fn snapshot(&self) -> Arc<dyn Lexicon> {
        self.current.read().await.clone()
    }

    pub async fn replace(&self, lexicon: Arc<dyn Lexicon>) {
        let entries = lexicon.metadata().entry_count;
        *self.current.write().await = lexicon;
        tracing::info!("Lexicon replaced ({} entries)", entries);
    }
}

impl Default for LexiconState {
    fn default() -> Self {
        Self::new(Arc::new(Vec::<WordPair>::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_survives_replace() {
        let state = LexiconState::default();
        let before = state.snapshot().await;

        state
            .replace(Arc::new(vec![WordPair::new("cat", "gato")]))
            .await;

        assert_eq!(before.metadata().entry_count, 0);
        let after = state.snapshot().await;
        assert_eq!(after.find_exact("cat").as_deref(), Some("gato"));
    }
}
