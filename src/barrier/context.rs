//! Deadline and cancellation for a wait.
//!
//! A `WaitContext` combines an optional deadline with an optional
//! subscription to the process [`Shutdown`](crate::lifecycle::Shutdown)
//! signal. Either one ends the wait.

use std::fmt;
use std::future::pending;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant};

/// Why a context is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneReason {
    /// The deadline passed.
    DeadlineExceeded,
    /// Shutdown was triggered.
    Cancelled,
}

impl fmt::Display for DoneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoneReason::DeadlineExceeded => write!(f, "deadline exceeded"),
            DoneReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Cooperative deadline/cancel signal threaded through a wait.
#[derive(Debug)]
pub struct WaitContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

impl WaitContext {
    /// A context that is never done on its own.
    pub fn background() -> Self {
        Self {
            deadline: None,
            cancel: None,
        }
    }

    /// A context that expires `timeout` from now.
    ///
    /// A timeout too large to represent as an instant means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => Self::with_deadline(deadline),
            None => Self::background(),
        }
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::background()
        }
    }

    /// Also end the context once shutdown is triggered, including a trigger
    /// that happened before this call.
    ///
    /// If every sender is dropped without triggering, the context is never cancelled.
    pub fn with_cancel(mut self, rx: watch::Receiver<bool>) -> Self {
        self.cancel = Some(rx);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Non-blocking check: is the context already done?
    pub fn check(&self) -> Option<DoneReason> {
        if self.cancel.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(DoneReason::Cancelled);
        }

        match self.deadline {
            Some(at) if Instant::now() >= at => Some(DoneReason::DeadlineExceeded),
            _ => None,
        }
    }

    /// Wait until the context is done. Never resolves for a background context.
    ///
    /// Cancel-safe: dropping the future loses no cancellation.
    pub async fn done(&mut self) -> DoneReason {
        if let Some(reason) = self.check() {
            return reason;
        }

        let deadline = self.deadline;
        let expired = async move {
            match deadline {
                Some(at) => time::sleep_until(at).await,
                None => pending::<()>().await,
            }
        };

        let cancel = &mut self.cancel;
        let cancelled = async move {
            match cancel.as_mut() {
                Some(rx) => {
                    if rx.wait_for(|triggered| *triggered).await.is_err() {
                        pending::<()>().await;
                    }
                }
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            _ = expired => DoneReason::DeadlineExceeded,
            _ = cancelled => DoneReason::Cancelled,
        }
    }
}

impl Default for WaitContext {
    fn default() -> Self {
        Self::background()
    }
}
