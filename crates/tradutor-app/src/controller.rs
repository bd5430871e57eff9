use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::BufReader;
use tokio::task::{Id, JoinSet};
use tokio_util::sync::CancellationToken;
use tradutor_io::WordListSource;
use tradutor_lang_portuguese::EnglishPortugueseProcessor;
use tradutor_types::AppEvent;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::{input_loop, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // pasted input bursts
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Spawn the app tasks. Also returns the console task id: the app is
    /// done when that task finishes.
    pub async fn spawn_tasks(
        &self,
        processor: Arc<EnglishPortugueseProcessor>,
        source: Arc<dyn WordListSource>,
    ) -> (JoinSet<anyhow::Result<()>>, Id) {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            processor,
            source,
        ));

        // Console UI
        let interactive = atty::is(atty::Stream::Stdin);
        tasks.spawn(input_loop(
            BufReader::new(tokio::io::stdin()),
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));
        let ui_task = tasks
            .spawn(ui_loop(
                std::io::stdout(),
                interactive,
                self.channels.app_to_ui.1.clone(),
                self.cancel_token.child_token(),
            ))
            .id();

        // Sync watcher
        let sync_interval = {
            let config = self.state.config.read().await;
            (config.sync_interval_secs > 0).then(|| Duration::from_secs(config.sync_interval_secs))
        };
        tasks.spawn(watcher_io(
            sync_interval,
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        (tasks, ui_task)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
