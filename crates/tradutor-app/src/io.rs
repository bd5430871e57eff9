use std::time::Duration;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use tradutor_types::AppEvent;

/// Requests a word list sync at startup and then every `interval`
pub async fn watcher_io(
    interval: Option<Duration>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    event_tx.send(AppEvent::SyncRequested).await?;

    let Some(interval) = interval else {
        tracing::info!("Periodic sync disabled");
        return Ok(());
    };

    tracing::info!("Resyncing word list every {:?}", interval);
    let mut ticker = tokio::time::interval(interval);
    // First tick completes immediately, the startup request covers it
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = event_tx.send(AppEvent::SyncRequested).await {
                    tracing::error!("Failed to request sync: {}", e);
                    return Ok(());
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("Sync watcher stopping");
                return Ok(());
            }
        }
    }
}
