//! `pod-ready`: block until labelled pods are ready, then publish their addresses.
//!
//! ```text
//! pod-ready --namespace loadtests --timeout 300 role=driver role=server role=client role=client
//! ```

use clap::Parser;

use pod_ready::cli::Args;
use pod_ready::config::{load_config, validate_config, ConfigError, ReadyConfig};
use pod_ready::lifecycle::signals::spawn_signal_listener;
use pod_ready::lifecycle::startup;
use pod_ready::observability::logging;
use pod_ready::output::format_addresses;
use pod_ready::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ReadyConfig::default(),
    };
    args.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability)?;

    tracing::info!(
        namespace = config.namespace.as_deref().unwrap_or("*"),
        timeout_secs = config.timeout_secs,
        poll_interval_ms = config.poll_interval_ms,
        output_file = %config.output_file.display(),
        selectors = ?config.selectors,
        "pod-ready v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    match startup::run(&config, &shutdown).await {
        Ok(addresses) => {
            println!("{}", format_addresses(&addresses));
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Readiness wait failed");
            Err(e.into())
        }
    }
}
