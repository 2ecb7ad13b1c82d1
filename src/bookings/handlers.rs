use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use time::{Date, OffsetDateTime};
use tracing::instrument;
use uuid::Uuid;

use super::{
    dto::{BookingList, CreateBookingRequest},
    repo_types::Booking,
    services,
};
use crate::{
    auth::AuthUser, dto::MessageResponse, error::ApiError, extract::ApiJson, state::AppState,
};

pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/spots/:id/bookings", post(create_booking))
        .route("/bookings/current", get(list_my_bookings))
        .route("/bookings/:id", delete(delete_booking))
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[instrument(skip(state, body))]
pub async fn create_booking(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<Uuid>,
    ApiJson(body): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let booking = services::create(&state, user_id, spot_id, body, today()).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[instrument(skip(state))]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<BookingList>, ApiError> {
    let bookings = services::list_for_user(&state, user_id).await?;
    Ok(Json(BookingList { bookings }))
}

#[instrument(skip(state))]
pub async fn delete_booking(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    services::delete(&state, user_id, id, today()).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
