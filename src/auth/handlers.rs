use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{LoginRequest, RefreshRequest, RestoreResponse, SessionResponse},
    jwt::{AuthUser, JwtKeys},
};
use crate::{
    error::{ApiError, FieldErrors},
    extract::ApiJson,
    state::AppState,
    users::services as users,
};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(login).get(restore))
        .route("/session/refresh", post(refresh))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let credential = payload.credential.trim();

    let mut errors = FieldErrors::new();
    if credential.is_empty() {
        errors.add("credential", "Email or username is required");
    }
    if payload.password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors.into_result()?;

    let Some(user) = users::login(&state, credential, &payload.password).await? else {
        warn!("login rejected");
        return Err(ApiError::InvalidCredentials);
    };

    let session = JwtKeys::from_ref(&state).issue_session(user)?;
    info!(user_id = %session.user.id, "user logged in");
    Ok(Json(session))
}

#[instrument(skip(state, auth))]
pub async fn restore(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
) -> Result<Json<RestoreResponse>, ApiError> {
    let user = match auth {
        Some(AuthUser(user_id)) => users::get_current_user_by_id(&state, user_id).await?,
        None => None,
    };
    Ok(Json(RestoreResponse { user }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RefreshRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys.verify_refresh(&payload.refresh_token).map_err(|e| {
        warn!(error = %e, "refresh rejected");
        ApiError::Unauthorized("Invalid or expired refresh token")
    })?;

    let user = users::get_current_user_by_id(&state, claims.sub)
        .await?
        .ok_or(ApiError::Unauthorized("User not found"))?;

    Ok(Json(keys.issue_session(user)?))
}
