//! Readiness barrier subsystem.
//!
//! # Data Flow
//! ```text
//! wait.rs (loop):
//!     context.rs check → PodLister::list (raced with context)
//!     → assign.rs match_selectors(selectors, snapshot)
//!     → complete: pods::pod_address per slot → Ok(addresses)
//!     → incomplete / list error: sleep (raced with context) → next tick
//!     → context done: Err(ReadyError::Timeout)
//! ```
//!
//! # Design Decisions
//! - Single task, no shared state; each tick re-lists and re-matches
//! - Sleeping is interruptible; a deadline is never overshot by a poll interval
//! - Persistent lister failures and never-ready pods surface as the same timeout

pub mod assign;
pub mod context;
pub mod wait;

pub use assign::{match_selectors, Assignment, Incomplete};
pub use context::{DoneReason, WaitContext};
pub use wait::{wait_for_ready_pods, Barrier, ReadyError, DEFAULT_POLL_INTERVAL};
