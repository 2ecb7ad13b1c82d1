use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Row behind a spot card: a spot joined with its preview image and
/// review average.
#[derive(Debug, Clone, FromRow)]
pub struct SpotCardRow {
    pub id: Uuid,
    pub preview_image: Option<String>,
    pub city: String,
    pub state: String,
    pub avg_rating: Option<f64>,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SpotImage {
    pub id: Uuid,
    #[serde(skip)]
    pub spot_id: Uuid,
    pub url: String,
    pub preview: bool,
}

#[derive(Debug, Clone, Copy, Default, FromRow)]
pub struct SpotStats {
    pub num_reviews: i64,
    pub avg_star_rating: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewSpot {
    pub owner_id: Uuid,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
}
