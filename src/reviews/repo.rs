use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewReview, Review, ReviewDetails, ReviewRow};
use crate::db::{classify, StoreResult};

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn list_for_spot(&self, spot_id: Uuid) -> StoreResult<Vec<ReviewDetails>>;

    /// Fails with `Duplicate("review")` when the user already reviewed the spot.
    async fn create(&self, review: NewReview) -> StoreResult<Review>;

    async fn find(&self, id: Uuid) -> StoreResult<Option<Review>>;

    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct PgReviewStore {
    db: PgPool,
}

impl PgReviewStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn list_for_spot(&self, spot_id: Uuid) -> StoreResult<Vec<ReviewDetails>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT r.id, r.spot_id, r.user_id, r.review, r.stars, r.created_at, r.updated_at,
                   u.first_name, u.last_name, u.username
              FROM reviews r
              JOIN users u ON u.id = r.user_id
             WHERE r.spot_id = $1
             ORDER BY r.created_at DESC
            "#,
        )
        .bind(spot_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(ReviewDetails::from).collect())
    }

    async fn create(&self, review: NewReview) -> StoreResult<Review> {
        sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (spot_id, user_id, review, stars)
            VALUES ($1, $2, $3, $4)
            RETURNING id, spot_id, user_id, review, stars, created_at, updated_at
            "#,
        )
        .bind(review.spot_id)
        .bind(review.user_id)
        .bind(&review.review)
        .bind(review.stars)
        .fetch_one(&self.db)
        .await
        .map_err(classify)
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Review>> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, spot_id, user_id, review, stars, created_at, updated_at
              FROM reviews
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
