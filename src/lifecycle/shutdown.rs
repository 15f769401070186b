//! Shutdown coordination.

use std::sync::Arc;

use tokio::sync::watch;

/// Coordinator for cancelling in-flight waits.
///
/// The triggered state is sticky: a wait that subscribes after the
/// trigger still observes it.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal. Returns how many subscribers are currently listening.
    pub fn trigger(&self) -> usize {
        self.tx.send_replace(true);
        self.tx.receiver_count()
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
