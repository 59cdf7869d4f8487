use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Callback invoked when a timer fires
pub type TimerHandler = Box<dyn FnOnce() + Send>;

/// Keyed fire-and-forget timers with cancellation.
///
/// Scheduling a key that already has a pending timer replaces it. Handlers
/// run on a spawned task; a handler that needs async work spawns it itself.
#[derive(Clone)]
pub struct TimerManager {
    active: Arc<Mutex<HashMap<String, tokio::task::JoinHandle<()>>>>,
}

impl TimerManager {
    /// Create a new timer manager
    pub fn new() -> Self {
        Self {
            active: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Schedule a handler to run after a delay
    pub async fn schedule(&self, key: impl Into<String>, delay: Duration, handler: TimerHandler) {
        let key = key.into();
        let key_clone = key.clone();
        let active = Arc::clone(&self.active);

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            handler();

            let mut timers = active.lock().await;
            timers.remove(&key_clone);
        });

        let mut timers = self.active.lock().await;
        if let Some(previous) = timers.insert(key, task) {
            previous.abort();
        }
    }

    /// Cancel a pending timer; returns whether one was pending
    pub async fn cancel(&self, key: &str) -> bool {
        let mut timers = self.active.lock().await;

        if let Some(task) = timers.remove(key) {
            task.abort();
            true
        } else {
            false
        }
    }

    /// Check whether a timer is pending for a key
    pub async fn has_timer(&self, key: &str) -> bool {
        let timers = self.active.lock().await;
        timers.contains_key(key)
    }

    /// Number of pending timers
    pub async fn active_count(&self) -> usize {
        let timers = self.active.lock().await;
        timers.len()
    }

    /// Cancel every pending timer
    pub async fn cancel_all(&self) {
        let mut timers = self.active.lock().await;

        for (_, task) in timers.drain() {
            task.abort();
        }
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}
