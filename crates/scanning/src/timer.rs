use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Owned, single-flight debounce timer.
///
/// Arming always cancels the previously pending timer, so at most one timer
/// is live per handle at any time. Dropping the handle cancels whatever is
/// pending, which keeps a torn-down scan field from firing a stale
/// classification.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the timer; `on_fire` runs once `delay` passes without a re-arm.
    pub fn arm<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire.await;
        }));
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
