use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::sync::RwLock;
use tradutor_config::Config;
use tradutor_core::LexiconState;

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub lexicon: LexiconState,
    pub status: AppStatus,
    pub sync_running: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            lexicon: LexiconState::default(),
            status: AppStatus::new(),
            sync_running: AtomicBool::new(false),
        }
    }
}
