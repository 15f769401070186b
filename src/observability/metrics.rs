//! Metrics collection.
//!
//! # Metrics
//! - `pod_ready_poll_attempts_total` (counter): lister calls made
//! - `pod_ready_list_failures_total` (counter): lister calls that failed
//! - `pod_ready_outcomes_total` (counter): finished waits by `outcome`
//! - `pod_ready_wait_seconds` (histogram): time from first poll to outcome

use std::time::Duration;

pub fn record_attempt() {
    ::metrics::counter!("pod_ready_poll_attempts_total").increment(1);
}

pub fn record_list_failure() {
    ::metrics::counter!("pod_ready_list_failures_total").increment(1);
}

/// Record how a wait ended (`ready`, `timeout` or `cancelled`) and how long it took.
pub fn record_outcome(outcome: &'static str, elapsed: Duration) {
    ::metrics::counter!("pod_ready_outcomes_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("pod_ready_wait_seconds", "outcome" => outcome)
        .record(elapsed.as_secs_f64());
}
