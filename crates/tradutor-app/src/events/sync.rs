use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, SystemTime};

use kanal::AsyncSender;
use tradutor_config::Config;
use tradutor_core::dictionary::{Lexicon, LexiconLoader};
use tradutor_io::{FileWordListSource, HttpWordListSource, WordListSource};
use tradutor_lang_portuguese::{BilingualLexicon, WordListLoader};
use tradutor_store::{SqliteStore, StoreError};
use tradutor_types::{AppEvent, WordPair};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncReport {
    Synced { pairs: usize },
    /// Source unreachable, the stored word list stays live
    Offline { kept: usize },
}

/// Local file when configured, the published word list otherwise
pub fn word_list_source(config: &Config) -> anyhow::Result<Arc<dyn WordListSource>> {
    match &config.lexicon.word_list_path {
        Some(path) => Ok(Arc::new(FileWordListSource::new(path))),
        None => Ok(Arc::new(HttpWordListSource::new(
            config.network.word_list_url.clone(),
            Duration::from_secs(config.network.timeout_seconds),
        )?)),
    }
}

/// Load the persisted word list into the live lexicon
pub async fn load_persisted(state: &AppState) -> anyhow::Result<usize> {
    let db_path = state.config.read().await.store.database_path.clone();

    let pairs = tokio::task::spawn_blocking(move || -> Result<Vec<WordPair>, StoreError> {
        SqliteStore::open(&db_path)?.load_all()
    })
    .await??;

    let count = pairs.len();
    state
        .lexicon
        .replace(Arc::new(BilingualLexicon::from_pairs(pairs)))
        .await;
    state.status.sync.write().await.stored_pairs = count;

    tracing::info!("Loaded {} stored word pairs", count);
    Ok(count)
}

/// Fetch the word list, persist it and swap it in.
///
/// An unreachable source is not an error: the current lexicon is kept.
pub async fn sync_word_list(
    state: &AppState,
    source: &dyn WordListSource,
) -> anyhow::Result<SyncReport> {
    tracing::info!("Syncing word list from {}", source.describe());

    let text = match source.fetch().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Word list unreachable, keeping stored data: {}", e);
            let kept = state.lexicon.snapshot().await.metadata().entry_count;

            let mut status = state.status.sync.write().await;
            status.online = false;
            status.error_count += 1;
            status.current_message = format!("Offline: {e}");
            return Ok(SyncReport::Offline { kept });
        }
    };

    let rows = WordListLoader.load_from_str(&text)?;
    let db_path = state.config.read().await.store.database_path.clone();

    let rows = tokio::task::spawn_blocking(move || -> Result<Vec<WordPair>, StoreError> {
        let mut store = SqliteStore::open(&db_path)?;
        store.replace_all(&rows)?;
        Ok(rows)
    })
    .await??;

    let pairs = rows.len();
    state
        .lexicon
        .replace(Arc::new(BilingualLexicon::from_pairs(rows)))
        .await;

    let mut status = state.status.sync.write().await;
    status.online = true;
    status.last_sync_time = Some(SystemTime::now());
    status.sync_count += 1;
    status.stored_pairs = pairs;
    status.current_message = format!("Synced {pairs} pairs");

    tracing::info!("Word list synced ({} pairs)", pairs);
    Ok(SyncReport::Synced { pairs })
}

/// Run a sync in the background unless one is already in flight
pub async fn handle_sync_request(
    state: Arc<AppState>,
    source: Arc<dyn WordListSource>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if state.sync_running.swap(true, Ordering::SeqCst) {
        tracing::debug!("Sync already running, request ignored");
        return Ok(());
    }

    let tx = app_to_ui_tx.clone();
    tokio::spawn(async move {
        let event = match sync_word_list(&state, source.as_ref()).await {
            Ok(SyncReport::Synced { pairs }) => AppEvent::SyncFinished { pairs },
            Ok(SyncReport::Offline { kept }) => {
                AppEvent::StatusUpdate(format!("Offline, using {kept} stored pairs"))
            }
            Err(e) => {
                tracing::error!("Sync failed: {e:#}");
                AppEvent::StatusUpdate(format!("Sync failed: {e}"))
            }
        };
        state.sync_running.store(false, Ordering::SeqCst);

        if let Err(e) = tx.send(event).await {
            tracing::error!("Failed to send sync status to UI: {}", e);
        }
    });

    Ok(())
}
