//! The readiness wait loop.
//!
//! # Responsibilities
//! - Poll the pod lister until every selector slot has a distinct ready pod
//! - Race every lister call and every sleep against the wait context
//! - Turn a complete assignment into slot-ordered `host:port` addresses
//!
//! # Design Decisions
//! - The context is the only timeout authority; there is no retry cap
//! - Lister failures are transient: logged, counted, then polled again
//! - Nothing is carried between ticks; each snapshot is matched from scratch

use std::time::Duration;

use kube::api::ListParams;
use thiserror::Error;
use tokio::time::{self, Instant};

use crate::barrier::assign::match_selectors;
use crate::barrier::context::{DoneReason, WaitContext};
use crate::observability::metrics;
use crate::pods::{name_of, PodLister};
use crate::selector::{Selector, SelectorError};

/// Default delay between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors returned by the readiness barrier.
#[derive(Debug, Error)]
pub enum ReadyError {
    /// A selector string could not be parsed, so it could never be satisfied.
    #[error(transparent)]
    InvalidSelector(#[from] SelectorError),

    /// The context ended before every selector was matched.
    #[error("gave up waiting for ready pods ({reason}) after {attempts} attempt(s): {last_failure}")]
    Timeout {
        reason: DoneReason,
        attempts: u64,
        /// Why the most recent attempt did not succeed.
        last_failure: String,
    },
}

impl ReadyError {
    /// True if the wait ended because shutdown was triggered.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ReadyError::Timeout { reason: DoneReason::Cancelled, .. })
    }
}

/// Polls a pod lister until a set of selectors is satisfied.
#[derive(Debug, Clone)]
pub struct Barrier {
    poll_interval: Duration,
    list_params: ListParams,
}

impl Barrier {
    /// Create a barrier that sleeps `poll_interval` between incomplete attempts.
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            list_params: ListParams::default(),
        }
    }

    /// Pass these parameters to every list call (e.g. a coarse server-side label filter).
    pub fn with_list_params(mut self, params: ListParams) -> Self {
        self.list_params = params;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Wait until each selector is matched by a distinct ready pod.
    ///
    /// Returns one `host:port` per selector, in selector order. An empty
    /// selector list succeeds immediately without listing pods.
    pub async fn wait<L, S>(
        &self,
        mut ctx: WaitContext,
        lister: &L,
        selectors: &[S],
    ) -> Result<Vec<String>, ReadyError>
    where
        L: PodLister + ?Sized,
        S: AsRef<str>,
    {
        if selectors.is_empty() {
            return Ok(Vec::new());
        }

        let selectors = Selector::parse_all(selectors)?;
        let started = Instant::now();
        let mut attempts = 0u64;
        let mut last_failure = String::from("no attempt completed");

        tracing::info!(
            selectors = selectors.len(),
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            timeout_ms = ctx
                .deadline()
                .map(|d| d.saturating_duration_since(started).as_millis() as u64),
            "Waiting for ready pods"
        );

        loop {
            if let Some(reason) = ctx.check() {
                return Err(self.give_up(reason, attempts, last_failure, started));
            }

            attempts += 1;
            metrics::record_attempt();

            let listed = tokio::select! {
                listed = lister.list(&self.list_params) => listed,
                reason = ctx.done() => {
                    return Err(self.give_up(reason, attempts, last_failure, started));
                }
            };

            match listed {
                Ok(pods) => match match_selectors(&selectors, &pods) {
                    Ok(assignment) => {
                        for (slot, pod) in assignment.pods().iter().enumerate() {
                            tracing::debug!(
                                slot,
                                selector = %selectors[slot],
                                pod = name_of(pod),
                                "Selector matched"
                            );
                        }

                        let addresses = assignment.addresses();
                        metrics::record_outcome("ready", started.elapsed());
                        tracing::info!(
                            attempts,
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            addresses = ?addresses,
                            "All selectors matched ready pods"
                        );
                        return Ok(addresses);
                    }
                    Err(incomplete) => {
                        tracing::debug!(
                            attempt = attempts,
                            pods = pods.len(),
                            slot = incomplete.slot,
                            selector = %selectors[incomplete.slot],
                            "Selector not yet satisfied"
                        );
                        last_failure = format!(
                            "selector {:?} (slot {}) has no unused ready pod among {} listed",
                            selectors[incomplete.slot].to_string(),
                            incomplete.slot,
                            pods.len()
                        );
                    }
                },
                Err(e) => {
                    metrics::record_list_failure();
                    tracing::warn!(attempt = attempts, error = %e, "Failed to list pods, retrying");
                    last_failure = e.to_string();
                }
            }

            tokio::select! {
                _ = time::sleep(self.poll_interval) => {}
                reason = ctx.done() => {
                    return Err(self.give_up(reason, attempts, last_failure, started));
                }
            }
        }
    }

    fn give_up(
        &self,
        reason: DoneReason,
        attempts: u64,
        last_failure: String,
        started: Instant,
    ) -> ReadyError {
        let outcome = match reason {
            DoneReason::DeadlineExceeded => "timeout",
            DoneReason::Cancelled => "cancelled",
        };
        metrics::record_outcome(outcome, started.elapsed());
        tracing::warn!(
            %reason,
            attempts,
            elapsed_ms = started.elapsed().as_millis() as u64,
            last_failure = %last_failure,
            "Stopped waiting for ready pods"
        );

        ReadyError::Timeout {
            reason,
            attempts,
            last_failure,
        }
    }
}

impl Default for Barrier {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// Wait for ready pods with the default poll interval.
pub async fn wait_for_ready_pods<L, S>(
    ctx: WaitContext,
    lister: &L,
    selectors: &[S],
) -> Result<Vec<String>, ReadyError>
where
    L: PodLister + ?Sized,
    S: AsRef<str>,
{
    Barrier::default().wait(ctx, lister, selectors).await
}
