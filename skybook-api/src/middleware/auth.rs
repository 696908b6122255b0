use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;

use skybook_core::Identity;

use crate::error::AppError;
use crate::state::AppState;

/// Verifies the bearer token, loads the account behind it, and injects the
/// caller's `Identity` into request extensions. Role gates run inside the
/// core services, not here.
pub async fn require_auth(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) =
        bearer.ok_or_else(|| AppError::AuthenticationError("Unauthorized".to_string()))?;

    let user_id = state.tokens.verify_access_token(bearer.token())?;

    // The token only carries the user id; the role flag comes from the
    // current account record so a demotion takes effect immediately.
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("Unauthorized".to_string()))?;

    req.extensions_mut().insert(Identity {
        user_id: user.id,
        is_admin: user.is_admin,
    });

    Ok(next.run(req).await)
}
