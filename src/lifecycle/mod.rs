//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Build pod lister → Wait for ready pods → Write output file
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → shutdown.rs watch flag → wait context cancelled
//! ```
//!
//! # Design Decisions
//! - Fail fast: a lister that cannot be built is fatal, a failing list call is not
//! - Shutdown cancels the wait instead of killing the process mid-write

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
