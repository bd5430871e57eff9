use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;

/// Word list sync information
#[derive(Clone, Debug, Default)]
pub struct SyncStatus {
    pub online: bool,
    pub last_sync_time: Option<SystemTime>,
    pub sync_count: u64,
    pub error_count: u64,
    pub stored_pairs: usize,
    pub current_message: String,
}

impl SyncStatus {
    /// One-line report for the console
    pub fn summary(&self) -> String {
        let state = if self.online { "online" } else { "offline" };
        let last = self
            .last_sync_time
            .and_then(|t| t.elapsed().ok())
            .map(|age| format!("{}s ago", age.as_secs()))
            .unwrap_or_else(|| "never".to_string());

        format!(
            "{state}, {} stored pairs, last sync {last}, {} syncs, {} errors",
            self.stored_pairs, self.sync_count, self.error_count
        )
    }
}

/// Application status
pub struct AppStatus {
    pub sync: Arc<RwLock<SyncStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            sync: Arc::new(RwLock::new(SyncStatus::default())),
        }
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
