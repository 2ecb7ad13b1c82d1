use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::{
    dto::{AddImageRequest, CreateSpotRequest, SpotDetails, SpotList},
    repo_types::{Spot, SpotImage},
    services,
};
use crate::{
    auth::AuthUser,
    dto::{MessageResponse, Pagination},
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

pub fn spot_routes() -> Router<AppState> {
    Router::new()
        .route("/spots", get(list_spots).post(create_spot))
        .route("/spots/current", get(list_my_spots))
        .route("/spots/:id", get(get_spot).delete(delete_spot))
        .route("/spots/:id/images", post(add_spot_image))
}

#[instrument(skip(state))]
pub async fn list_spots(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<SpotList>, ApiError> {
    let spots = services::list_cards(&state, None, page).await?;
    Ok(Json(SpotList { spots }))
}

#[instrument(skip(state))]
pub async fn list_my_spots(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(page): Query<Pagination>,
) -> Result<Json<SpotList>, ApiError> {
    let spots = services::list_cards(&state, Some(user_id), page).await?;
    Ok(Json(SpotList { spots }))
}

#[instrument(skip(state))]
pub async fn get_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SpotDetails>, ApiError> {
    Ok(Json(services::details(&state, id).await?))
}

#[instrument(skip(state, body))]
pub async fn create_spot(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<CreateSpotRequest>,
) -> Result<(StatusCode, Json<Spot>), ApiError> {
    let spot = services::create(&state, user_id, body).await?;
    Ok((StatusCode::CREATED, Json(spot)))
}

#[instrument(skip(state, body))]
pub async fn add_spot_image(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    ApiJson(body): ApiJson<AddImageRequest>,
) -> Result<(StatusCode, Json<SpotImage>), ApiError> {
    let image = services::add_image(&state, user_id, id, &body.url, body.preview).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

#[instrument(skip(state))]
pub async fn delete_spot(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    services::delete(&state, user_id, id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
