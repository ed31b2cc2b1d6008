use serde::Serialize;
use utoipa::ToSchema;

/// Health payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Number of matches currently being scored on this instance.
    pub live_matches: usize,
}

impl HealthResponse {
    /// Storage is reachable; matches are persisted on finish.
    pub fn ok(live_matches: usize) -> Self {
        Self {
            status: "ok".to_string(),
            live_matches,
        }
    }

    /// No storage backend; scoring still works but nothing is persisted.
    pub fn degraded(live_matches: usize) -> Self {
        Self {
            status: "degraded".to_string(),
            live_matches,
        }
    }
}
