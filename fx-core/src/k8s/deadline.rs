use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::*;

use crate::errors::*;

// Far enough out that a scope acquired with it never expires in practice
const UNBOUNDED_BUDGET: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// A time budget shared by every remote call made during one workflow invocation.  The budget is
/// converted to an absolute expiry when the scope is acquired, so time spent in one call is not
/// available to the next.  The scope is cancelled when it is dropped, and any call still running
/// under it fails with `DeadlineExceeded`.
pub struct DeadlineScope {
    expires_at: Instant,
    cancel_tx: Arc<watch::Sender<bool>>,
}

#[cfg(test)]
#[derive(Clone)]
pub(crate) struct CancelHandle(Arc<watch::Sender<bool>>);

#[cfg(test)]
impl CancelHandle {
    pub(crate) fn cancel(&self) {
        self.0.send_replace(true);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }
}

impl DeadlineScope {
    pub fn acquire(budget: Duration) -> DeadlineScope {
        let (cancel_tx, _) = watch::channel(false);
        debug!("acquired deadline scope with budget {budget:?}");

        let now = Instant::now();
        let expires_at = now.checked_add(budget).unwrap_or_else(|| {
            warn!("deadline budget {budget:?} is too large, treating it as unbounded");
            now + UNBOUNDED_BUDGET
        });
        DeadlineScope { expires_at, cancel_tx: Arc::new(cancel_tx) }
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    #[cfg(test)]
    pub(crate) fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.cancel_tx.clone())
    }

    #[cfg(test)]
    pub(crate) fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }

    pub async fn run<T, F>(&self, op: &str, fut: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        let mut cancel_rx = self.cancel_tx.subscribe();
        if *cancel_rx.borrow_and_update() {
            return Err(DeleteError::deadline_exceeded(&format!("{op} (scope already cancelled)")));
        }

        tokio::select! {
            res = tokio::time::timeout_at(self.expires_at, fut) => match res {
                Ok(inner) => inner,
                Err(_) => {
                    warn!("{op} did not finish before the deadline");
                    Err(DeleteError::deadline_exceeded(op))
                },
            },
            _ = cancel_rx.wait_for(|cancelled| *cancelled) => {
                Err(DeleteError::deadline_exceeded(&format!("{op} (scope cancelled)")))
            },
        }
    }
}

impl Drop for DeadlineScope {
    fn drop(&mut self) {
        self.cancel_tx.send_replace(true);
        debug!("released deadline scope");
    }
}
