//! # Loading Commands
//!
//! The storefront has no backend, so "reload" only replays the simulated
//! fetch: the flag goes up and comes down after the configured delay.

use tracing::debug;

use crate::state::{LoadingState, LoadingStatus};

/// Starts a new simulated fetch and returns the raised status.
///
/// Calling this while a fetch is pending restarts the delay.
pub fn simulate_fetch(loading: &LoadingState) -> LoadingStatus {
    debug!("simulate_fetch command");
    loading.trigger();
    loading.status()
}

/// Current loading flag.
pub fn loading_status(loading: &LoadingState) -> LoadingStatus {
    debug!("loading_status command");
    loading.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_simulate_fetch_round_trip() {
        let loading = LoadingState::new(Duration::from_millis(800));
        assert!(!loading_status(&loading).is_loading);

        let status = simulate_fetch(&loading);
        assert!(status.is_loading);
        assert_eq!(status.delay_ms, 800);

        tokio::time::sleep(Duration::from_millis(801)).await;
        assert!(!loading_status(&loading).is_loading);
    }

    #[test]
    fn test_status_wire_shape() {
        let loading = LoadingState::new(Duration::from_millis(250));
        let value = serde_json::to_value(loading_status(&loading)).unwrap();
        assert_eq!(value["isLoading"], false);
        assert_eq!(value["delayMs"], 250);
    }
}
