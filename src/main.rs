//! bikeshare - interactive explorer for bike-share trip data

use std::io::{self, ErrorKind};
use std::process::ExitCode;
use std::sync::Arc;

use bikeshare_explorer::config::ExplorerConfig;
use bikeshare_explorer::error::ExploreError;
use bikeshare_explorer::ingestion::{CsvTripSource, TracingObserver};
use bikeshare_explorer::prompt::Console;
use bikeshare_explorer::session::Session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr and stay quiet by default so they don't interleave with prompts.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bikeshare_explorer=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ExplorerConfig::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "starting");

    let source = CsvTripSource::new(config.clone()).with_observer(Arc::new(TracingObserver));
    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    match Session::new(&source, &config, console).run() {
        Ok(()) => ExitCode::SUCCESS,
        // Closing stdin ends the session the same way as answering "no".
        Err(ExploreError::Console(err)) if err.kind() == ErrorKind::UnexpectedEof => {
            tracing::info!("input closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "session failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
