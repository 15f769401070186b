//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! barrier / startup produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (attempt/failure counters, wait histogram)
//! ```
//!
//! # Design Decisions
//! - Structured fields, not formatted strings, for anything a machine may filter on
//! - JSON format for clusters, pretty format for terminals
//! - Metrics go through the `metrics` facade; without a recorder they are no-ops

pub mod logging;
pub mod metrics;
