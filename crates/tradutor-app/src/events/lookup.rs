use kanal::AsyncSender;
use tradutor_core::language::LanguageProcessor;
use tradutor_lang_portuguese::EnglishPortugueseProcessor;
use tradutor_types::{AppEvent, DisplayResult};

use crate::state::AppState;

pub async fn handle_text_input(
    state: &AppState,
    text: String,
    processor: &EnglishPortugueseProcessor,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let lexicon = state.lexicon.snapshot().await;
    let outcome = processor.translate(&text, lexicon.as_ref());
    tracing::debug!("Lookup '{}' -> {:?}", text.trim(), outcome);

    app_to_ui_tx
        .send(AppEvent::ShowResult(DisplayResult {
            query: text,
            outcome,
        }))
        .await?;

    Ok(())
}
