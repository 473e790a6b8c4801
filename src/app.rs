use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use crate::bootstrap;
use crate::cli::Cli;
use crate::interactive;
use crate::output;
use crate::paths;
use crate::request_engine::ExchangeController;
use crate::transcript::{self, TranscriptRecord};

pub async fn run(cli: Cli) -> Result<()> {
    paths::ensure_dirs()?;

    if cli.show_transcripts {
        let records = transcript::list_recent(cli.transcript_lines)?;
        output::print_transcripts(&records);
        return Ok(());
    }

    let controller = bootstrap::bootstrap(&cli)?;

    if cli.once {
        run_exchange(&cli, &controller).await;
        return Ok(());
    }

    interactive::run_interactive(&cli, &controller).await
}

/// Triggers one exchange and waits for it to settle. Ctrl-C aborts the
/// in-flight attempt through the cancellation handle. Failures surface as
/// `Error` state through the subscribed reporter; nothing propagates here.
pub async fn run_exchange(cli: &Cli, controller: &Arc<ExchangeController>) {
    let Some(handle) = controller.start() else {
        println!("Key exchange already in progress.");
        return;
    };

    let cancel = handle.cancellation_token();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });
    handle.finished().await;
    interrupt.abort();

    if let Some(record) = TranscriptRecord::from_state(&controller.state(), &cli.model, cli.photons)
        && let Err(err) = transcript::save_transcript(&record)
    {
        warn!("failed to save transcript: {err:#}");
    }
}
