use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        live::{
            ActiveTargetRequest, OutcomeResponse, ScoreEventRequest, ScoreboardResponse,
            UndoResponse,
        },
        setup::MatchSetupRequest,
    },
    error::AppError,
    routes::auth::AuthenticatedUser,
    services::match_service,
    state::SharedState,
};

/// Live scoring endpoints. Every match is private to the user who set it up.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/matches", post(start_match))
        .route("/matches/{id}", get(get_scoreboard).delete(abandon_match))
        .route("/matches/{id}/events", post(record_event))
        .route("/matches/{id}/undo", post(undo_event))
        .route("/matches/{id}/active", put(set_active))
        .route("/matches/{id}/finish", post(finish_match))
}

/// Complete match setup and start scoring.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service")),
    request_body = MatchSetupRequest,
    responses(
        (status = 201, description = "Match started", body = ScoreboardResponse),
        (status = 400, description = "Invalid setup")
    )
)]
pub async fn start_match(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Valid(Json(payload)): Valid<Json<MatchSetupRequest>>,
) -> Result<(StatusCode, Json<ScoreboardResponse>), AppError> {
    let view = match_service::start_match(&state, &user, payload)?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Current scoreboard of a live match.
#[utoipa::path(
    get,
    path = "/matches/{id}",
    tag = "matches",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service"),
    ("id" = String, Path, description = "Identifier of the live match")),
    responses(
        (status = 200, description = "Live scoreboard", body = ScoreboardResponse),
        (status = 404, description = "No match configured")
    )
)]
pub async fn get_scoreboard(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScoreboardResponse>, AppError> {
    Ok(Json(match_service::scoreboard(&state, &user, id)?))
}

/// Apply a point or a foul.
#[utoipa::path(
    post,
    path = "/matches/{id}/events",
    tag = "matches",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service"),
    ("id" = String, Path, description = "Identifier of the live match")),
    request_body = ScoreEventRequest,
    responses(
        (status = 200, description = "Updated scoreboard", body = ScoreboardResponse),
        (status = 400, description = "Unknown target or value outside the mode vocabulary"),
        (status = 404, description = "No match configured")
    )
)]
pub async fn record_event(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ScoreEventRequest>,
) -> Result<Json<ScoreboardResponse>, AppError> {
    Ok(Json(match_service::record_event(
        &state, &user, id, payload,
    )?))
}

/// Revert the most recent scoring event.
#[utoipa::path(
    post,
    path = "/matches/{id}/undo",
    tag = "matches",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service"),
    ("id" = String, Path, description = "Identifier of the live match")),
    responses(
        (status = 200, description = "Reverted event, if any, and the scoreboard", body = UndoResponse),
        (status = 404, description = "No match configured")
    )
)]
pub async fn undo_event(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<UndoResponse>, AppError> {
    Ok(Json(match_service::undo(&state, &user, id)?))
}

/// Highlight the entity the next events will most likely target.
#[utoipa::path(
    put,
    path = "/matches/{id}/active",
    tag = "matches",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service"),
    ("id" = String, Path, description = "Identifier of the live match")),
    request_body = ActiveTargetRequest,
    responses(
        (status = 200, description = "Updated scoreboard", body = ScoreboardResponse),
        (status = 400, description = "Target not part of this match"),
        (status = 404, description = "No match configured")
    )
)]
pub async fn set_active(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ActiveTargetRequest>,
) -> Result<Json<ScoreboardResponse>, AppError> {
    Ok(Json(match_service::set_active(&state, &user, id, payload)?))
}

/// Finish the match and return its outcome. Recording happens in the background.
#[utoipa::path(
    post,
    path = "/matches/{id}/finish",
    tag = "matches",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service"),
    ("id" = String, Path, description = "Identifier of the live match")),
    responses(
        (status = 200, description = "Final outcome", body = OutcomeResponse),
        (status = 404, description = "No match configured")
    )
)]
pub async fn finish_match(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<OutcomeResponse>, AppError> {
    let finish = match_service::finish_match(&state, &user, id)?;
    Ok(Json(finish.outcome))
}

/// Discard a live match without recording it.
#[utoipa::path(
    delete,
    path = "/matches/{id}",
    tag = "matches",
    params(("X-Auth-Token" = String, Header, description = "Session token issued by the authentication service"),
    ("id" = String, Path, description = "Identifier of the live match")),
    responses(
        (status = 204, description = "Match discarded"),
        (status = 404, description = "No match configured")
    )
)]
pub async fn abandon_match(
    State(state): State<SharedState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    match_service::abandon(&state, &user, id)?;
    Ok(StatusCode::NO_CONTENT)
}
