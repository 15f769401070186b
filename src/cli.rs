//! Command-line interface.
//!
//! Flags override values from the optional config file; positional
//! selectors replace any configured list.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ReadyConfig;

#[derive(Debug, Parser)]
#[command(name = "pod-ready")]
#[command(version, about = "Wait until labelled pods are ready and publish their addresses", long_about = None)]
pub struct Args {
    /// TOML config file
    #[arg(short, long, env = "READY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Namespace to watch (all namespaces if unset)
    #[arg(short, long, env = "READY_NAMESPACE")]
    pub namespace: Option<String>,

    /// Seconds to wait before giving up
    #[arg(short, long, env = "READY_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Milliseconds between polls
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// File to write the comma-separated addresses to
    #[arg(short, long, env = "READY_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Label selectors, one per expected pod, e.g. `role=client`
    pub selectors: Vec<String>,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(self, config: &mut ReadyConfig) {
        if let Some(namespace) = self.namespace {
            config.namespace = Some(namespace);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(interval) = self.poll_interval_ms {
            config.poll_interval_ms = interval;
        }
        if let Some(path) = self.output_file {
            config.output_file = path;
        }
        if !self.selectors.is_empty() {
            config.selectors = self.selectors;
        }
    }
}
