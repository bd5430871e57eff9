use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tradutor_config::Config;
use tradutor_core::dictionary::LexiconLoader;
use tradutor_core::language::LanguageProcessor;
use tradutor_io::{AssetCache, HttpAssetSource};
use tradutor_lang_portuguese::{EnglishPortugueseProcessor, WordListLoader};
use tradutor_store::SqliteStore;
use tradutor_types::{DisplayResult, FuzzyFallback};

pub mod controller;
pub mod display;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod status;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::sync::{SyncReport, load_persisted, sync_word_list, word_list_source};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "tradutor", version, about = "Offline English/Portuguese word lookup")]
struct Cli {
    /// Config profile to use
    #[arg(long, default_value = "main")]
    profile: String,

    /// Only exact translations, no "did you mean" suggestions
    #[arg(long)]
    no_fuzzy: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a single word using the stored word list
    Lookup { word: String },
    /// Fetch the word list and replace the stored copy
    Sync,
    /// Replace the stored word list with a local CSV file
    Import { file: PathBuf },
    /// Offline asset cache
    Cache {
        #[command(subcommand)]
        action: CacheCommand,
    },
    /// Create a profile copied from the main profile
    NewProfile { name: String },
    /// Interactive console, one word per line (default)
    Repl,
}

#[derive(Subcommand)]
enum CacheCommand {
    /// Download every asset into the current cache version
    Install,
    /// Remove cache versions other than the current one
    Activate,
    /// Print an asset, from the cache when possible
    Get { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    profile::init_user_config()?;
    let mut config = profile::load_user_profile(&cli.profile)?;
    config.apply_env();
    if cli.no_fuzzy {
        config.lexicon.fuzzy_fallback = FuzzyFallback::Disabled;
    }

    match cli.command.unwrap_or(Command::Repl) {
        Command::Lookup { word } => lookup_once(config, &word).await,
        Command::Sync => sync_once(config).await,
        Command::Import { file } => import_file(config, file).await,
        Command::Cache { action } => run_cache(config, action).await,
        Command::NewProfile { name } => {
            let path = profile::add_profile_from_default(&name)?;
            println!("Created profile {}", path.display());
            Ok(())
        }
        Command::Repl => run_repl(config).await,
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Persisted word list into a fresh state. A broken database leaves the
/// lexicon empty instead of aborting.
async fn load_state(config: Config) -> Arc<AppState> {
    let state = Arc::new(AppState::new(config));

    if let Err(e) = load_persisted(&state).await {
        tracing::error!("Error loading the database: {e:#}");
        state.status.sync.write().await.current_message = "Error loading the database".into();
    }

    state
}

async fn lookup_once(config: Config, word: &str) -> anyhow::Result<()> {
    let processor = EnglishPortugueseProcessor::new(config.lexicon.fuzzy_fallback);
    let state = load_state(config).await;

    let lexicon = state.lexicon.snapshot().await;
    let outcome = processor.translate(word, lexicon.as_ref());
    println!(
        "{}",
        display::render(&DisplayResult {
            query: word.to_string(),
            outcome,
        })
    );
    Ok(())
}

async fn sync_once(config: Config) -> anyhow::Result<()> {
    let source = word_list_source(&config)?;
    let state = load_state(config).await;

    match sync_word_list(&state, source.as_ref()).await? {
        SyncReport::Synced { pairs } => println!("Synced {pairs} word pairs"),
        SyncReport::Offline { kept } => println!("Offline, kept {kept} stored word pairs"),
    }

    let status = state.status.sync.read().await;
    tracing::info!("{} ({})", status.current_message, status.summary());
    Ok(())
}

async fn import_file(config: Config, file: PathBuf) -> anyhow::Result<()> {
    let db_path = config.store.database_path.clone();

    let stored = tokio::task::spawn_blocking(move || -> anyhow::Result<usize> {
        let rows = WordListLoader.load_from_file(&file)?;
        let mut store = SqliteStore::open(&db_path)?;
        Ok(store.replace_all(&rows)?)
    })
    .await??;

    println!("Imported {stored} word pairs");
    Ok(())
}

async fn run_cache(config: Config, action: CacheCommand) -> anyhow::Result<()> {
    let cache = AssetCache::new(
        &config.cache.root,
        config.cache.version.clone(),
        config.cache.assets.clone(),
    );
    let source = HttpAssetSource::new(
        config.cache.base_url.clone(),
        Duration::from_secs(config.network.timeout_seconds),
    )?;

    match action {
        CacheCommand::Install => {
            let count = cache.install(&source).await?;
            println!("Cached {count} assets in {}", cache.version());
        }
        CacheCommand::Activate => {
            let evicted = cache.activate().await?;
            println!("Evicted {} stale caches", evicted.len());
        }
        CacheCommand::Get { path } => {
            let bytes = cache.fetch(&path, &source).await?;
            std::io::stdout().write_all(&bytes)?;
        }
    }
    Ok(())
}

async fn run_repl(config: Config) -> anyhow::Result<()> {
    let processor = Arc::new(EnglishPortugueseProcessor::new(config.lexicon.fuzzy_fallback));
    let source = word_list_source(&config)?;
    let state = load_state(config).await;

    let controller = AppController::new(state);
    let (mut tasks, ui_task) = controller.spawn_tasks(processor, source).await;

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break;
            }
            joined = tasks.join_next_with_id() => match joined {
                Some(Ok((id, Ok(())))) => {
                    if id == ui_task {
                        break;
                    }
                }
                Some(Ok((_, Err(e)))) => {
                    tracing::error!("task failed: {e:#}");
                    break;
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    break;
                }
                None => break,
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}
