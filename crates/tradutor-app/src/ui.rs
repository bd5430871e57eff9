use std::io::Write;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tradutor_types::AppEvent;

use crate::display::render;

/// Console input: each line is one query. End of input asks the app to quit.
///
/// Runs apart from [`ui_loop`] so a full request channel never stops the
/// answers from being drained.
pub async fn input_loop<R>(
    input: R,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => return Ok(()),
        };

        match line {
            Some(text) => ui_to_app_tx.send(AppEvent::TextInput(text)).await?,
            None => {
                tracing::debug!("Console input closed");
                ui_to_app_tx.send(AppEvent::Quit).await?;
                return Ok(());
            }
        }
    }
}

/// Console output: prints answers until the app confirms it is quitting,
/// so queued answers are never dropped.
pub async fn ui_loop<W>(
    mut output: W,
    interactive: bool,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    W: Write,
{
    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => return Ok(()),
        };

        match event {
            AppEvent::ShowResult(result) => {
                writeln!(output, "{}", render(&result))?;
                prompt(&mut output, interactive)?;
            }
            AppEvent::SyncFinished { pairs } => {
                if interactive {
                    writeln!(output, "Word list synced ({pairs} pairs)")?;
                    prompt(&mut output, interactive)?;
                }
            }
            AppEvent::StatusUpdate(status) => {
                tracing::info!("Status: {}", status);
            }
            AppEvent::BackendReady => {
                prompt(&mut output, interactive)?;
            }
            AppEvent::Quit => {
                output.flush()?;
                return Ok(());
            }
            AppEvent::TextInput(_) | AppEvent::SyncRequested => {}
        }
    }
}

fn prompt<W: Write>(output: &mut W, interactive: bool) -> std::io::Result<()> {
    if interactive {
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}
