use tradutor_config::Config;
use tradutor_core::dictionary::Lexicon;
use tradutor_io::{FileWordListSource, WordListSource};

use crate::events::sync::{SyncReport, load_persisted, sync_word_list, word_list_source};
use crate::state::AppState;

fn config_in(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.store.database_path = dir.join("tradutor.db").display().to_string();
    config
}

#[tokio::test]
async fn test_sync_persists_and_swaps() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("palavras.csv");
    std::fs::write(&csv, "cat,gato\nhouse,casa\n\n").unwrap();

    let state = AppState::new(config_in(dir.path()));
    let report = sync_word_list(&state, &FileWordListSource::new(&csv))
        .await
        .unwrap();

    assert_eq!(report, SyncReport::Synced { pairs: 2 });
    let lexicon = state.lexicon.snapshot().await;
    assert_eq!(lexicon.find_exact("casa").as_deref(), Some("house"));

    let status = state.status.sync.read().await;
    assert!(status.online);
    assert_eq!(status.sync_count, 1);
    assert_eq!(status.stored_pairs, 2);
}

#[tokio::test]
async fn test_offline_keeps_current_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("palavras.csv");
    std::fs::write(&csv, "cat,gato\n").unwrap();

    let state = AppState::new(config_in(dir.path()));
    sync_word_list(&state, &FileWordListSource::new(&csv))
        .await
        .unwrap();

    let gone = FileWordListSource::new(dir.path().join("gone.csv"));
    let report = sync_word_list(&state, &gone).await.unwrap();

    assert_eq!(report, SyncReport::Offline { kept: 1 });
    let lexicon = state.lexicon.snapshot().await;
    assert_eq!(lexicon.find_exact("cat").as_deref(), Some("gato"));

    let status = state.status.sync.read().await;
    assert!(!status.online);
    assert_eq!(status.error_count, 1);
}

#[tokio::test]
async fn test_restart_restores_stored_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("palavras.csv");
    std::fs::write(&csv, "water,agua\nfire,fogo\n").unwrap();

    let first = AppState::new(config_in(dir.path()));
    sync_word_list(&first, &FileWordListSource::new(&csv))
        .await
        .unwrap();
    drop(first);
    std::fs::remove_file(&csv).unwrap();

    let second = AppState::new(config_in(dir.path()));
    assert_eq!(load_persisted(&second).await.unwrap(), 2);
    let lexicon = second.lexicon.snapshot().await;
    assert_eq!(lexicon.find_exact("fogo").as_deref(), Some("fire"));
}

#[tokio::test]
async fn test_resync_with_same_rows_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("palavras.csv");
    std::fs::write(&csv, "bank,banco\nbank,margem\nseat,banco\n").unwrap();
    let source = FileWordListSource::new(&csv);

    let state = AppState::new(config_in(dir.path()));
    let words = ["bank", "banco", "seat", "margem", "chair"];

    sync_word_list(&state, &source).await.unwrap();
    let lexicon = state.lexicon.snapshot().await;
    let before: Vec<_> = words.iter().map(|w| lexicon.find_exact(w)).collect();

    sync_word_list(&state, &source).await.unwrap();
    let lexicon = state.lexicon.snapshot().await;
    let after: Vec<_> = words.iter().map(|w| lexicon.find_exact(w)).collect();

    assert_eq!(before, after);
    assert_eq!(before[1].as_deref(), Some("bank"));
    assert_eq!(lexicon.metadata().entry_count, 3);
}

#[tokio::test]
async fn test_garbage_word_list_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("palavras.csv");
    std::fs::write(&csv, "cat,gato\n").unwrap();

    let state = AppState::new(config_in(dir.path()));
    sync_word_list(&state, &FileWordListSource::new(&csv))
        .await
        .unwrap();

    std::fs::write(&csv, "<html>captive portal</html>").unwrap();
    assert!(sync_word_list(&state, &FileWordListSource::new(&csv)).await.is_err());

    let lexicon = state.lexicon.snapshot().await;
    assert_eq!(lexicon.find_exact("cat").as_deref(), Some("gato"));
}

#[test]
fn test_source_follows_config() {
    let mut config = Config::default();
    config.lexicon.word_list_path = Some("/tmp/palavras.csv".to_string());
    assert_eq!(word_list_source(&config).unwrap().describe(), "/tmp/palavras.csv");

    config.lexicon.word_list_path = None;
    config.network.word_list_url = "http://example.test/palavras.csv".to_string();
    assert_eq!(
        word_list_source(&config).unwrap().describe(),
        "http://example.test/palavras.csv"
    );
}
