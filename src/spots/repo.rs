use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewSpot, Spot, SpotCardRow, SpotImage, SpotStats};
use crate::db::{classify, StoreResult};

#[async_trait]
pub trait SpotStore: Send + Sync {
    /// Cards newest first; `owner` narrows to one host's spots.
    async fn list_cards(
        &self,
        owner: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<SpotCardRow>>;

    async fn find(&self, id: Uuid) -> StoreResult<Option<Spot>>;

    async fn images(&self, spot_id: Uuid) -> StoreResult<Vec<SpotImage>>;

    async fn stats(&self, spot_id: Uuid) -> StoreResult<SpotStats>;

    /// Inserts the spot and, when given, its preview image as one unit.
    async fn create(&self, spot: NewSpot, preview_image: Option<&str>) -> StoreResult<Spot>;

    async fn add_image(&self, spot_id: Uuid, url: &str, preview: bool) -> StoreResult<SpotImage>;

    /// Deletes the spot with its images, reviews and bookings.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct PgSpotStore {
    db: PgPool,
}

impl PgSpotStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

const SPOT_COLUMNS: &str = "id, owner_id, address, city, state, country, lat, lng, name, \
                            description, price, created_at, updated_at";

#[async_trait]
impl SpotStore for PgSpotStore {
    async fn list_cards(
        &self,
        owner: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<SpotCardRow>> {
        let rows = sqlx::query_as::<_, SpotCardRow>(
            r#"
            SELECT s.id, s.city, s.state, s.price,
                   (SELECT AVG(r.stars)::float8
                      FROM reviews r
                     WHERE r.spot_id = s.id) AS avg_rating,
                   (SELECT i.url
                      FROM spot_images i
                     WHERE i.spot_id = s.id AND i.preview
                     ORDER BY i.created_at DESC
                     LIMIT 1) AS preview_image
            FROM spots s
            WHERE $1::uuid IS NULL OR s.owner_id = $1
            ORDER BY s.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Spot>> {
        let spot = sqlx::query_as::<_, Spot>(&format!(
            "SELECT {SPOT_COLUMNS} FROM spots WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(spot)
    }

    async fn images(&self, spot_id: Uuid) -> StoreResult<Vec<SpotImage>> {
        let images = sqlx::query_as::<_, SpotImage>(
            r#"
            SELECT id, spot_id, url, preview
              FROM spot_images
             WHERE spot_id = $1
             ORDER BY created_at ASC
            "#,
        )
        .bind(spot_id)
        .fetch_all(&self.db)
        .await?;
        Ok(images)
    }

    async fn stats(&self, spot_id: Uuid) -> StoreResult<SpotStats> {
        let stats = sqlx::query_as::<_, SpotStats>(
            r#"
            SELECT COUNT(*) AS num_reviews, AVG(stars)::float8 AS avg_star_rating
              FROM reviews
             WHERE spot_id = $1
            "#,
        )
        .bind(spot_id)
        .fetch_one(&self.db)
        .await?;
        Ok(stats)
    }

    async fn create(&self, spot: NewSpot, preview_image: Option<&str>) -> StoreResult<Spot> {
        let mut tx = self.db.begin().await?;

        let created = sqlx::query_as::<_, Spot>(&format!(
            r#"
            INSERT INTO spots (owner_id, address, city, state, country, lat, lng, name,
                               description, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {SPOT_COLUMNS}
            "#
        ))
        .bind(spot.owner_id)
        .bind(&spot.address)
        .bind(&spot.city)
        .bind(&spot.state)
        .bind(&spot.country)
        .bind(spot.lat)
        .bind(spot.lng)
        .bind(&spot.name)
        .bind(&spot.description)
        .bind(spot.price)
        .fetch_one(&mut *tx)
        .await
        .map_err(classify)?;

        if let Some(url) = preview_image {
            sqlx::query("INSERT INTO spot_images (spot_id, url, preview) VALUES ($1, $2, true)")
                .bind(created.id)
                .bind(url)
                .execute(&mut *tx)
                .await
                .map_err(classify)?;
        }

        tx.commit().await?;
        Ok(created)
    }

    async fn add_image(&self, spot_id: Uuid, url: &str, preview: bool) -> StoreResult<SpotImage> {
        let image = sqlx::query_as::<_, SpotImage>(
            r#"
            INSERT INTO spot_images (spot_id, url, preview)
            VALUES ($1, $2, $3)
            RETURNING id, spot_id, url, preview
            "#,
        )
        .bind(spot_id)
        .bind(url)
        .bind(preview)
        .fetch_one(&self.db)
        .await
        .map_err(classify)?;
        Ok(image)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM spots WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
