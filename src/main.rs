mod api;
mod config;
mod logging;
mod models;
mod run;
mod ui;
mod view;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, rest) = config::Config::from_args(&args)?;

    let log_path = logging::init()?;
    tracing::info!(
        endpoint = %config.endpoint,
        timeout = ?config.timeout,
        log = %log_path.display(),
        "starting txview"
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    if rest.is_empty() {
        // Fetch tasks are spawned from the UI thread
        let _guard = runtime.enter();
        run::as_tui(&config)
    } else {
        run::as_cli(&rest, &config, &runtime)
    }
}
