use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Coalesces bursts of calls into one trailing invocation.
///
/// Used to thin out scroll event dispatch; each call cancels the previous
/// pending invocation and restarts the wait.
pub struct Debouncer {
    wait: Duration,
    pending: Arc<Mutex<Option<tokio::task::JoinHandle<()>>>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedule `f` to run after the wait, cancelling any pending run
    pub async fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let wait = self.wait;

        let task = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f();
        });

        let mut slot = self.pending.lock().await;
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    /// Cancel any pending invocation
    pub async fn cancel(&self) {
        let mut slot = self.pending.lock().await;
        if let Some(task) = slot.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_burst_coalesces_to_one_call() {
        let debouncer = Debouncer::new(Duration::from_millis(40));
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let calls = Arc::clone(&calls);
            debouncer
                .call(move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                })
                .await;
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_suppresses_pending_call() {
        let debouncer = Debouncer::new(Duration::from_millis(40));
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        debouncer
            .call(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        debouncer.cancel().await;

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
