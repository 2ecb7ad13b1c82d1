use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::SafeUser;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub spot_id: Uuid,
    pub user_id: Uuid,
    pub review: String,
    pub stars: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A review joined with its author's public fields.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: Uuid,
    pub spot_id: Uuid,
    pub user_id: Uuid,
    pub review: String,
    pub stars: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetails {
    #[serde(flatten)]
    pub review: Review,
    pub user: SafeUser,
}

impl From<ReviewRow> for ReviewDetails {
    fn from(r: ReviewRow) -> Self {
        Self {
            user: SafeUser {
                id: r.user_id,
                first_name: r.first_name,
                last_name: r.last_name,
                username: r.username,
            },
            review: Review {
                id: r.id,
                spot_id: r.spot_id,
                user_id: r.user_id,
                review: r.review,
                stars: r.stars,
                created_at: r.created_at,
                updated_at: r.updated_at,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub spot_id: Uuid,
    pub user_id: Uuid,
    pub review: String,
    pub stars: i32,
}
