use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skybook_core::validation::{validate_credentials, validate_registration, UserPayload};
use skybook_core::{policy, Identity, ProfileUpdate, StoreError, User, UserStatus};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenPairResponse {
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
    refresh_token: Option<String>,
}

/// Account view without the credential hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserResponse {
    id: Uuid,
    email: String,
    username: String,
    fullname: String,
    is_admin: bool,
    status: UserStatus,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            fullname: user.fullname,
            is_admin: user.is_admin,
            status: user.status,
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/update-user/{id}", put(update_user))
        .route("/view-users", get(view_users))
        .layer(axum::middleware::from_fn_with_state(
            state,
            crate::middleware::auth::require_auth,
        ));

    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/log-in", post(log_in))
        .route("/refresh-token", post(refresh_token))
        .merge(protected)
}

// ============================================================================
// Handlers
// ============================================================================

async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<TokenPairResponse>, AppError> {
    let valid = validate_registration(&payload)?;

    // Pre-check for a friendly message; the unique index on email is the
    // real guard against concurrent sign-ups.
    if state.users.find_by_email(&valid.email).await?.is_some() {
        return Err(AppError::ConflictError(format!(
            "{} has already been registered",
            valid.email
        )));
    }

    let hash = state.passwords.hash_password(&valid.password)?;
    let user = User::new(valid.email, valid.username, valid.fullname, hash, valid.is_admin);

    match state.users.insert(&user).await {
        Ok(()) => {}
        Err(StoreError::DuplicateKey(_)) => {
            return Err(AppError::ConflictError(format!(
                "{} has already been registered",
                user.email
            )));
        }
        Err(err) => return Err(err.into()),
    }
    tracing::info!(user = %user.id, "user registered");

    token_pair(&state, user.id)
}

async fn log_in(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<TokenPairResponse>, AppError> {
    let (email, password) = validate_credentials(&payload)?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFoundError("User is not registered".to_string()))?;

    // Soft-deleted accounts stay on record but cannot log in.
    if !user.is_active() {
        return Err(AppError::NotFoundError("User has been deleted".to_string()));
    }

    if !state.passwords.verify_password(&password, &user.password)? {
        return Err(AppError::AuthenticationError(
            "Username/password not valid".to_string(),
        ));
    }

    token_pair(&state, user.id)
}

async fn update_user(
    State(state): State<AppState>,
    Extension(_caller): Extension<Identity>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, AppError> {
    let valid = validate_registration(&payload)?;
    let hash = state.passwords.hash_password(&valid.password)?;

    let changes = ProfileUpdate {
        email: valid.email,
        username: valid.username,
        fullname: valid.fullname,
        password_hash: hash,
        is_admin: valid.is_admin,
    };

    let updated = state
        .users
        .update_profile(id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFoundError("User not found".to_string()))?;

    Ok(Json(UserResponse::from(updated)))
}

async fn view_users(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    policy::require_admin(&caller)?;
    let users = state.users.find_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenPairResponse>, AppError> {
    let refresh = req
        .refresh_token
        .ok_or_else(|| AppError::BadRequestError("Refresh token is required".to_string()))?;

    let user_id = state.tokens.verify_refresh_token(&refresh)?;
    token_pair(&state, user_id)
}

fn token_pair(state: &AppState, user_id: Uuid) -> Result<Json<TokenPairResponse>, AppError> {
    let access_token = state.tokens.issue_access_token(user_id)?;
    let refresh_token = state.tokens.issue_refresh_token(user_id)?;
    Ok(Json(TokenPairResponse {
        access_token,
        refresh_token,
    }))
}
