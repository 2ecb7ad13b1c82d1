use time::Date;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::CreateBookingRequest,
    repo_types::{Booking, NewBooking},
};
use crate::{error::ApiError, spots::services::require_spot, state::AppState};

const BOOKING_STARTED: &str = "Bookings that have been started can't be deleted";
const BOOKING_NOT_YOURS: &str =
    "Booking must belong to the current user or the spot must belong to the current user";

#[instrument(skip(state, request))]
pub async fn create(
    state: &AppState,
    user_id: Uuid,
    spot_id: Uuid,
    request: CreateBookingRequest,
    today: Date,
) -> Result<Booking, ApiError> {
    let spot = require_spot(state, spot_id).await?;
    if spot.owner_id == user_id {
        return Err(ApiError::Forbidden("Spot must not belong to the current user"));
    }
    let (start_date, end_date) = request.validate(today).map_err(ApiError::Validation)?;

    let booking = state
        .bookings
        .create(NewBooking {
            spot_id,
            user_id,
            start_date,
            end_date,
        })
        .await
        .map_err(|e| {
            warn!(error = %e, %spot_id, "booking rejected");
            ApiError::from(e)
        })?;
    info!(booking_id = %booking.id, %spot_id, "booking created");
    Ok(booking)
}

pub async fn list_for_user(state: &AppState, user_id: Uuid) -> Result<Vec<Booking>, ApiError> {
    Ok(state.bookings.list_for_user(user_id).await?)
}

/// The booker or the spot's owner may cancel a booking that has not started.
#[instrument(skip(state))]
pub async fn delete(
    state: &AppState,
    user_id: Uuid,
    booking_id: Uuid,
    today: Date,
) -> Result<(), ApiError> {
    let booking = state
        .bookings
        .find(booking_id)
        .await?
        .ok_or(ApiError::NotFound("Booking couldn't be found"))?;

    if booking.user_id != user_id {
        let spot = require_spot(state, booking.spot_id).await?;
        if spot.owner_id != user_id {
            return Err(ApiError::Forbidden(BOOKING_NOT_YOURS));
        }
    }
    if booking.start_date <= today {
        return Err(ApiError::Forbidden(BOOKING_STARTED));
    }

    state.bookings.delete(booking_id).await?;
    info!(%booking_id, "booking deleted");
    Ok(())
}
