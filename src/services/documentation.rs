use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Snooker Scorer Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::matches::start_match,
        crate::routes::matches::get_scoreboard,
        crate::routes::matches::record_event,
        crate::routes::matches::undo_event,
        crate::routes::matches::set_active,
        crate::routes::matches::finish_match,
        crate::routes::matches::abandon_match,
        crate::routes::history::match_history,
        crate::routes::history::match_stats,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::setup::MatchModeDto,
            crate::dto::setup::MatchSetupRequest,
            crate::dto::live::EventTargetDto,
            crate::dto::live::ScoreEventRequest,
            crate::dto::live::ActiveTargetRequest,
            crate::dto::live::ScoreboardResponse,
            crate::dto::live::UndoResponse,
            crate::dto::live::OutcomeResponse,
            crate::dto::history::MatchHistoryItem,
            crate::dto::history::MatchStatsResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "matches", description = "Live match setup and scoring"),
        (name = "history", description = "Finished matches of the authenticated user"),
    )
)]
pub struct ApiDoc;
