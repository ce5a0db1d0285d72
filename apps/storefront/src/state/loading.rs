//! # Loading State
//!
//! The storefront pretends to fetch its catalog: a loading flag goes up,
//! and after a fixed delay it comes down again. While the flag is up, the
//! product list and the cart summary show placeholders and the quantity
//! pickers are disabled. No real I/O happens.
//!
//! ## Timer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  trigger() ──► generation += 1 ──► flag = true ──► spawn timer(gen)    │
//! │      │                                                  │               │
//! │      │ (again before it fires)                          │ sleep(delay)  │
//! │      ▼                                                  ▼               │
//! │  abort previous timer                      flag = false, only if gen   │
//! │                                            is still the latest          │
//! │                                                                         │
//! │  drop(LoadingState) ──► abort pending timer (transition discarded)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Snapshot of the loading flag for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingStatus {
    pub is_loading: bool,
    pub delay_ms: u64,
}

/// Simulated-latency gate.
///
/// [`LoadingState::trigger`] must be called from within a tokio runtime.
#[derive(Debug)]
pub struct LoadingState {
    flag: Arc<watch::Sender<bool>>,
    generation: Arc<AtomicU64>,
    delay: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl LoadingState {
    /// Creates an idle gate (flag down, no timer).
    pub fn new(delay: Duration) -> Self {
        let (flag, _) = watch::channel(false);
        LoadingState {
            flag: Arc::new(flag),
            generation: Arc::new(AtomicU64::new(0)),
            delay,
            timer: Mutex::new(None),
        }
    }

    /// Creates a gate that is already loading, as at startup.
    pub fn start(delay: Duration) -> Self {
        let state = Self::new(delay);
        state.trigger();
        state
    }

    pub fn is_loading(&self) -> bool {
        *self.flag.borrow()
    }

    /// Configured delay in whole milliseconds, saturating at `u64::MAX`.
    pub fn delay_ms(&self) -> u64 {
        u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn status(&self) -> LoadingStatus {
        LoadingStatus {
            is_loading: self.is_loading(),
            delay_ms: self.delay_ms(),
        }
    }

    /// Receiver that observes every flag transition.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag.subscribe()
    }

    /// Raises the flag and (re)starts the timer that lowers it.
    pub fn trigger(&self) {
        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.flag.send_replace(true);
        info!(generation, delay_ms = self.delay_ms(), "Loading started");

        let flag = Arc::clone(&self.flag);
        let latest = Arc::clone(&self.generation);
        let delay = self.delay;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let cleared = flag.send_if_modified(|loading| {
                // A newer trigger owns the flag now.
                if latest.load(Ordering::SeqCst) != generation || !*loading {
                    return false;
                }
                *loading = false;
                true
            });
            if cleared {
                info!(generation, "Loading finished");
            }
        }));
    }

    /// Drops the pending transition, leaving the flag as it is.
    pub fn cancel(&self) {
        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = timer.take() {
            pending.abort();
            debug!("Loading timer cancelled");
        }
    }
}

impl Drop for LoadingState {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(800);

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_is_idle() {
        let loading = LoadingState::new(DELAY);
        assert!(!loading.is_loading());
        assert_eq!(
            loading.status(),
            LoadingStatus {
                is_loading: false,
                delay_ms: 800
            }
        );
    }

    #[test]
    fn test_delay_ms_saturates() {
        assert_eq!(LoadingState::new(DELAY).delay_ms(), 800);
        assert_eq!(LoadingState::new(Duration::MAX).delay_ms(), u64::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_clears_after_delay() {
        let loading = LoadingState::start(DELAY);
        assert!(loading.is_loading());

        advance(799).await;
        assert!(loading.is_loading());

        advance(2).await;
        assert!(!loading.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_restarts_timer() {
        let loading = LoadingState::start(DELAY);
        advance(500).await;

        loading.trigger();
        advance(500).await;
        // The startup timer would have fired at 800ms.
        assert!(loading.is_loading());

        advance(301).await;
        assert!(!loading.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_after_finish() {
        let loading = LoadingState::start(DELAY);
        advance(900).await;
        assert!(!loading.is_loading());

        loading.trigger();
        assert!(loading.is_loading());
        advance(801).await;
        assert!(!loading.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_transitions() {
        let loading = LoadingState::new(DELAY);
        let mut rx = loading.subscribe();

        loading.trigger();
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());

        rx.changed().await.unwrap();
        assert!(!*rx.borrow_and_update());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_transition() {
        let loading = LoadingState::start(DELAY);
        loading.cancel();

        advance(2_000).await;
        assert!(loading.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_discards_pending_transition() {
        let loading = LoadingState::start(DELAY);
        let rx = loading.subscribe();
        drop(loading);

        advance(2_000).await;
        assert!(*rx.borrow());
    }
}
