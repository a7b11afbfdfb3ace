//! Cooperative shutdown signal shared by the session's loops.

use std::sync::Arc;

use tokio::sync::watch;

/// One-shot, cloneable shutdown flag.
///
/// Once triggered it stays triggered. Loops check [`is_triggered`](Self::is_triggered)
/// at the top of each iteration and race their sleeps against
/// [`triggered`](Self::triggered), so they stop within one interval.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`trigger`](Self::trigger) has been called on any clone.
    pub async fn triggered(&self) {
        let mut rx = self.tx.subscribe();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}
