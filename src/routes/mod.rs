use axum::{Router, middleware};

use crate::state::SharedState;

/// Session token middleware.
pub mod auth;
/// Swagger UI.
pub mod docs;
/// Health check route.
pub mod health;
/// History and statistics routes.
pub mod history;
/// Live match routes.
pub mod matches;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let user_router = matches::router()
        .merge(history::router())
        .route_layer(middleware::from_fn(auth::require_user));

    let api_router = health::router().merge(user_router);

    let docs_router = docs::router();

    api_router.merge(docs_router).with_state(state)
}
