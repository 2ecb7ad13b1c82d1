use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::{
    dto::{CreateReviewRequest, ReviewList},
    repo_types::Review,
    services,
};
use crate::{
    auth::AuthUser, dto::MessageResponse, error::ApiError, extract::ApiJson, state::AppState,
};

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/spots/:id/reviews", get(list_reviews).post(create_review))
        .route("/reviews/:id", delete(delete_review))
}

#[instrument(skip(state))]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(spot_id): Path<Uuid>,
) -> Result<Json<ReviewList>, ApiError> {
    let reviews = services::list_for_spot(&state, spot_id).await?;
    Ok(Json(ReviewList { reviews }))
}

#[instrument(skip(state, body))]
pub async fn create_review(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<Uuid>,
    ApiJson(body): ApiJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = services::create(&state, user_id, spot_id, body).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

#[instrument(skip(state))]
pub async fn delete_review(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    services::delete(&state, user_id, id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
