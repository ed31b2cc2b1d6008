use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether finished matches can currently be recorded, logging connectivity issues.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.require_match_store().await {
        Ok(store) => {
            if let Err(err) = store.health_check().await {
                warn!(error = %err, "storage health check failed");
            }
        }
        Err(_) => warn!("storage unavailable (degraded mode)"),
    }

    let live_matches = state.live_match_count();
    if state.is_degraded() {
        HealthResponse::degraded(live_matches)
    } else {
        HealthResponse::ok(live_matches)
    }
}
