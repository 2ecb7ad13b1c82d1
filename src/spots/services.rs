use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::{CreateSpotRequest, SpotCard, SpotDetails},
    repo_types::{Spot, SpotImage},
};
use crate::{
    dto::Pagination,
    error::{ApiError, FieldErrors},
    state::AppState,
};

pub const SPOT_NOT_FOUND: &str = "Spot couldn't be found";

pub async fn list_cards(
    state: &AppState,
    owner: Option<Uuid>,
    page: Pagination,
) -> Result<Vec<SpotCard>, ApiError> {
    let page = page.clamped();
    let rows = state.spots.list_cards(owner, page.limit, page.offset).await?;
    Ok(rows.into_iter().map(SpotCard::from).collect())
}

/// Loads a spot or fails with 404.
pub async fn require_spot(state: &AppState, id: Uuid) -> Result<Spot, ApiError> {
    state
        .spots
        .find(id)
        .await?
        .ok_or(ApiError::NotFound(SPOT_NOT_FOUND))
}

pub async fn details(state: &AppState, id: Uuid) -> Result<SpotDetails, ApiError> {
    let spot = require_spot(state, id).await?;
    let stats = state.spots.stats(id).await?;
    let images = state.spots.images(id).await?;
    let owner = state
        .users
        .find_safe_by_id(spot.owner_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("spot {id} has no owner row"))?;
    Ok(SpotDetails::new(spot, stats, images, owner))
}

#[instrument(skip(state, request))]
pub async fn create(
    state: &AppState,
    owner_id: Uuid,
    request: CreateSpotRequest,
) -> Result<Spot, ApiError> {
    let (new_spot, preview_image) = request
        .into_new_spot(owner_id)
        .map_err(ApiError::Validation)?;
    let spot = state
        .spots
        .create(new_spot, preview_image.as_deref())
        .await?;
    info!(spot_id = %spot.id, "spot created");
    Ok(spot)
}

#[instrument(skip(state, url))]
pub async fn add_image(
    state: &AppState,
    user_id: Uuid,
    spot_id: Uuid,
    url: &str,
    preview: bool,
) -> Result<SpotImage, ApiError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::Validation(FieldErrors::single("url", "Url is required")));
    }
    let spot = require_spot(state, spot_id).await?;
    if spot.owner_id != user_id {
        return Err(ApiError::Forbidden("Spot must belong to the current user"));
    }
    Ok(state.spots.add_image(spot_id, url, preview).await?)
}

#[instrument(skip(state))]
pub async fn delete(state: &AppState, user_id: Uuid, spot_id: Uuid) -> Result<(), ApiError> {
    let spot = require_spot(state, spot_id).await?;
    if spot.owner_id != user_id {
        return Err(ApiError::Forbidden("Spot must belong to the current user"));
    }
    state.spots.delete(spot_id).await?;
    info!(%spot_id, "spot deleted");
    Ok(())
}
