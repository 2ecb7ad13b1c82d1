use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::CreateReviewRequest,
    repo_types::{NewReview, Review, ReviewDetails},
};
use crate::{
    db::StoreError,
    error::{ApiError, FieldErrors},
    spots::services::require_spot,
    state::AppState,
};

pub async fn list_for_spot(
    state: &AppState,
    spot_id: Uuid,
) -> Result<Vec<ReviewDetails>, ApiError> {
    require_spot(state, spot_id).await?;
    Ok(state.reviews.list_for_spot(spot_id).await?)
}

#[instrument(skip(state, request))]
pub async fn create(
    state: &AppState,
    user_id: Uuid,
    spot_id: Uuid,
    request: CreateReviewRequest,
) -> Result<Review, ApiError> {
    let (review, stars) = request.validate().map_err(ApiError::Validation)?;
    require_spot(state, spot_id).await?;

    let new_review = NewReview {
        spot_id,
        user_id,
        review,
        stars,
    };
    match state.reviews.create(new_review).await {
        Ok(review) => {
            info!(review_id = %review.id, %spot_id, "review created");
            Ok(review)
        }
        Err(StoreError::Duplicate(_)) => Err(ApiError::Duplicate(
            "User already has a review for this spot",
            FieldErrors::single("review", "User already has a review for this spot"),
        )),
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state))]
pub async fn delete(state: &AppState, user_id: Uuid, review_id: Uuid) -> Result<(), ApiError> {
    let review = state
        .reviews
        .find(review_id)
        .await?
        .ok_or(ApiError::NotFound("Review couldn't be found"))?;
    if review.user_id != user_id {
        return Err(ApiError::Forbidden("Review must belong to the current user"));
    }
    state.reviews.delete(review_id).await?;
    info!(%review_id, "review deleted");
    Ok(())
}
