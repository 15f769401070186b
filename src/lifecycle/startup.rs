//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the Kubernetes pod lister for the configured namespace
//! - Run the readiness barrier under the configured timeout and shutdown signal
//! - Publish the resolved addresses to the output file
//!
//! # Design Decisions
//! - The output file is written only on success; a failed wait leaves it untouched
//! - Steps run in order, not concurrently

use thiserror::Error;

use crate::barrier::{Barrier, ReadyError, WaitContext};
use crate::config::ReadyConfig;
use crate::lifecycle::shutdown::Shutdown;
use crate::output::write_addresses;
use crate::pods::{KubePodLister, ListError, PodLister};

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to create Kubernetes client: {0}")]
    Client(#[from] ListError),

    #[error(transparent)]
    Ready(#[from] ReadyError),

    #[error("failed to write addresses to {path}: {source}")]
    Output {
        path: String,
        source: std::io::Error,
    },
}

/// Run the barrier against the cluster described by the ambient kubeconfig.
pub async fn run(config: &ReadyConfig, shutdown: &Shutdown) -> Result<Vec<String>, StartupError> {
    let lister = KubePodLister::try_default(config.namespace.as_deref()).await?;
    tracing::info!(
        namespace = lister.namespace().unwrap_or("*"),
        "Kubernetes client ready"
    );
    run_with_lister(config, &lister, shutdown).await
}

/// Run the barrier against any pod lister and publish the result.
pub async fn run_with_lister<L>(
    config: &ReadyConfig,
    lister: &L,
    shutdown: &Shutdown,
) -> Result<Vec<String>, StartupError>
where
    L: PodLister + ?Sized,
{
    let ctx = WaitContext::with_timeout(config.timeout()).with_cancel(shutdown.subscribe());
    let barrier = Barrier::new(config.poll_interval());

    let addresses = barrier.wait(ctx, lister, config.selectors.as_slice()).await?;

    write_addresses(&config.output_file, &addresses).map_err(|source| StartupError::Output {
        path: config.output_file.display().to_string(),
        source,
    })?;
    tracing::info!(
        path = %config.output_file.display(),
        count = addresses.len(),
        "Wrote pod addresses"
    );

    Ok(addresses)
}
