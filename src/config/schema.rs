//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default file the resolved addresses are written to.
pub const DEFAULT_OUTPUT_FILE: &str = "/tmp/loadtest_workers";

/// Root configuration for the readiness barrier.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadyConfig {
    /// Namespace to list pods in; all namespaces when unset.
    pub namespace: Option<String>,

    /// How long to wait for every selector to match, in seconds.
    pub timeout_secs: u64,

    /// Delay between polls, in milliseconds.
    pub poll_interval_ms: u64,

    /// Where the comma-separated address list is written.
    pub output_file: PathBuf,

    /// Label selectors, one slot each, in output order.
    pub selectors: Vec<String>,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl ReadyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ReadyConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            timeout_secs: 300,
            poll_interval_ms: 50,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            selectors: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log format.
    pub log_format: LogFormat,

    /// Level for this crate when `RUST_LOG` is unset (e.g. "info", "debug").
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_level: "info".to_string(),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}
