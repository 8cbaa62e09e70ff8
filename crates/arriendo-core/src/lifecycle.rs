//! Teardown tracking for the owning view context.

use std::sync::Arc;

use tokio::sync::watch;

/// One-way active flag shared between a sync controller and its spawned work.
///
/// The guard starts active and flips inactive exactly once, when the owning
/// view is torn down. Asynchronous continuations check [`is_active`] under
/// the state lock before writing; the polling loop selects on [`cancelled`]
/// so deactivation also wakes the timer.
///
/// [`is_active`]: LifecycleGuard::is_active
/// [`cancelled`]: LifecycleGuard::cancelled
#[derive(Debug, Clone)]
pub struct LifecycleGuard {
    shutdown: Arc<watch::Sender<bool>>,
}

impl LifecycleGuard {
    /// Creates an active guard.
    #[must_use]
    pub fn new() -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            shutdown: Arc::new(shutdown),
        }
    }

    /// Whether the owning view is still mounted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !*self.shutdown.borrow()
    }

    /// Flips the guard inactive. Returns true only for the call that
    /// performed the flip.
    pub fn deactivate(&self) -> bool {
        !self.shutdown.send_replace(true)
    }

    /// Resolves once the guard is inactive.
    pub async fn cancelled(&self) {
        let mut shutdown_rx = self.shutdown.subscribe();
        while !*shutdown_rx.borrow_and_update() {
            if shutdown_rx.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Default for LifecycleGuard {
    fn default() -> Self {
        Self::new()
    }
}
