//! Trailing-edge debouncer for search input.
//!
//! Each call replaces the previously scheduled action, so only the last
//! call within a burst fires once the delay elapses. Keeps the renderer
//! from being re-invoked on every keystroke.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Default debounce delay for search input.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Schedules an action to run after a quiet period.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the delay, cancelling any action
    /// still pending from an earlier call.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending action, if any, without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
