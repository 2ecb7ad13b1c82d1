use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo_types::{NewSpot, Spot, SpotCardRow, SpotImage, SpotStats};
use crate::{error::FieldErrors, users::SafeUser};

pub const NAME_MAX: usize = 50;

/// Rounds an average star rating to one decimal place.
pub fn round_rating(avg: f64) -> f64 {
    (avg * 10.0).round() / 10.0
}

/// Listing preview consumed by the spot card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotCard {
    pub id: Uuid,
    pub preview_image: Option<String>,
    pub city: String,
    pub state: String,
    /// `null` until the spot has a review.
    pub avg_rating: Option<f64>,
    pub price: f64,
}

impl From<SpotCardRow> for SpotCard {
    fn from(r: SpotCardRow) -> Self {
        Self {
            id: r.id,
            preview_image: r.preview_image,
            city: r.city,
            state: r.state,
            avg_rating: r.avg_rating.map(round_rating),
            price: r.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpotList {
    pub spots: Vec<SpotCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDetails {
    #[serde(flatten)]
    pub spot: Spot,
    pub num_reviews: i64,
    pub avg_star_rating: Option<f64>,
    pub spot_images: Vec<SpotImage>,
    pub owner: SafeUser,
}

impl SpotDetails {
    pub fn new(spot: Spot, stats: SpotStats, spot_images: Vec<SpotImage>, owner: SafeUser) -> Self {
        Self {
            spot,
            num_reviews: stats.num_reviews,
            avg_star_rating: stats.avg_star_rating.map(round_rating),
            spot_images,
            owner,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSpotRequest {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    /// Stored as the spot's first preview image when present.
    pub preview_image: Option<String>,
}

impl CreateSpotRequest {
    pub fn into_new_spot(self, owner_id: Uuid) -> Result<(NewSpot, Option<String>), FieldErrors> {
        let mut errors = FieldErrors::new();
        let required = [
            ("address", &self.address, "Street address is required"),
            ("city", &self.city, "City is required"),
            ("state", &self.state, "State is required"),
            ("country", &self.country, "Country is required"),
            ("description", &self.description, "Description is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.add(field, message);
            }
        }

        let lat = self.lat.filter(|v| (-90.0..=90.0).contains(v));
        if lat.is_none() {
            errors.add("lat", "Latitude must be within -90 and 90");
        }
        let lng = self.lng.filter(|v| (-180.0..=180.0).contains(v));
        if lng.is_none() {
            errors.add("lng", "Longitude must be within -180 and 180");
        }

        let name_len = self.name.trim().chars().count();
        if name_len == 0 || name_len > NAME_MAX {
            errors.add("name", "Name is required and must be at most 50 characters");
        }

        let price = self.price.filter(|p| p.is_finite() && *p > 0.0);
        if price.is_none() {
            errors.add("price", "Price per day must be a positive number");
        }

        let preview_image = self.preview_image.filter(|url| !url.trim().is_empty());

        match (lat, lng, price) {
            (Some(lat), Some(lng), Some(price)) if errors.is_empty() => Ok((
                NewSpot {
                    owner_id,
                    address: self.address.trim().to_owned(),
                    city: self.city.trim().to_owned(),
                    state: self.state.trim().to_owned(),
                    country: self.country.trim().to_owned(),
                    lat,
                    lng,
                    name: self.name.trim().to_owned(),
                    description: self.description.trim().to_owned(),
                    price,
                },
                preview_image,
            )),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddImageRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub preview: bool,
}
