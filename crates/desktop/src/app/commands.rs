//! Async adapters that move blocking core work off the UI thread.

use std::path::PathBuf;

use folio_core::resume;

use crate::app::message::{Effect, Message};

pub(crate) fn export_resume_command(destination: Option<PathBuf>) -> Effect {
    Effect::perform(
        async move {
            tokio::task::spawn_blocking(move || resume::export(destination))
                .await
                .map_err(|err| err.to_string())
                .and_then(|result| result.map_err(|err| format!("{err:#}")))
        },
        Message::ResumeSaved,
    )
}
