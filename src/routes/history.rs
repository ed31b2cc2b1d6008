use axum::{Extension, Json, Router, extract::State, routing::get};

use crate::{
    dto::history::{MatchHistoryItem, MatchStatsResponse},
    error::AppError,
    routes::auth::AuthenticatedUser,
    services::history_service,
    state::SharedState,
};

/// Read-back of the caller's finished matches.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/matches/history", get(match_history))
        .route("/matches/stats", get(match_stats))
}

/// Most recent finished matches, newest first.
#[utoipa::path(
    get,
    path = "/matches/history",
    tag = "history",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service")),
    responses(
        (status = 200, description = "Recent matches", body = [MatchHistoryItem]),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn match_history(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<MatchHistoryItem>>, AppError> {
    Ok(Json(history_service::recent_matches(&state, &user).await?))
}

/// Aggregate statistics over every finished match.
#[utoipa::path(
    get,
    path = "/matches/stats",
    tag = "history",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service")),
    responses(
        (status = 200, description = "Match statistics", body = MatchStatsResponse),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn match_stats(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Result<Json<MatchStatsResponse>, AppError> {
    Ok(Json(history_service::stats(&state, &user).await?))
}
