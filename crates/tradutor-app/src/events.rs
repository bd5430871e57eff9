use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tradutor_io::WordListSource;
use tradutor_lang_portuguese::EnglishPortugueseProcessor;
use tradutor_types::AppEvent;

use crate::state::AppState;

pub mod lookup;
pub mod sync;

use lookup::handle_text_input;
use sync::handle_sync_request;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    processor: Arc<EnglishPortugueseProcessor>,
    source: Arc<dyn WordListSource>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if let AppEvent::Quit = event {
            // Everything queued before this has been answered already
            app_to_ui_tx.send(AppEvent::Quit).await?;
            tracing::info!("[EVENT_LOOP] Quit");
            return Ok(());
        }

        handle_events(
            state.clone(),
            &processor,
            source.clone(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    processor: &EnglishPortugueseProcessor,
    source: Arc<dyn WordListSource>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            handle_text_input(&state, text, processor, app_to_ui_tx).await?;
        }
        AppEvent::SyncRequested => {
            handle_sync_request(state, source, app_to_ui_tx).await?;
        }
        AppEvent::ShowResult(_)
        | AppEvent::SyncFinished { .. }
        | AppEvent::StatusUpdate(_)
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
        AppEvent::Quit => {}
    }

    Ok(())
}
