use axum::{body::Body, http::Request, middleware::Next, response::Response};

use crate::error::AppError;

/// Header carrying the session token issued by the authentication service.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Identity of the caller, resolved from [`AUTH_TOKEN_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

/// Reject requests without a session token and expose the caller's identity to handlers.
///
/// The token is opaque to this service and used as the user id as-is.
pub async fn require_user(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let user = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| {
            AppError::Unauthorized("missing session token header `X-Auth-Token`".into())
        })?;

    req.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(req).await)
}
