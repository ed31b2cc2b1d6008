use std::time::Instant;

use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::state::SharedState;

/// Periodically discard live matches nobody has touched within the configured idle TTL.
/// Runs forever.
pub async fn run(state: SharedState) {
    let mut ticker = interval(state.config().live_match_sweep_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        sweep(&state, Instant::now());
    }
}

/// Evict matches idle as of `now`, returning how many were dropped.
pub fn sweep(state: &SharedState, now: Instant) -> usize {
    let idle_ttl = state.config().live_match_idle_ttl();
    let evicted = state.evict_idle_matches(now, idle_ttl);
    if evicted > 0 {
        info!(
            evicted,
            remaining = state.live_match_count(),
            idle_ttl_secs = idle_ttl.as_secs(),
            "discarded idle live matches"
        );
    }
    evicted
}
