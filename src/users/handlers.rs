use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::{dto::SignupForm, repo_types::SafeUser, services};
use crate::{
    auth::{dto::SessionResponse, jwt::JwtKeys, AuthUser},
    dto::MessageResponse,
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(signup))
        .route("/users/me", delete(delete_me))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, form))]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<SignupForm>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let request = form.submit()?;
    let user = services::signup(&state, request).await?;
    let session = JwtKeys::from_ref(&state).issue_session(user)?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SafeUser>, ApiError> {
    services::get_safe_user_by_id(&state, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User couldn't be found"))
}

#[instrument(skip(state))]
pub async fn delete_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    services::delete_user(&state, user_id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
