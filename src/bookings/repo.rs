use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Booking, NewBooking};
use crate::db::{classify, StoreError, StoreResult};

const BOOKING_COLUMNS: &str = "id, spot_id, user_id, start_date, end_date, created_at, updated_at";

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Inserts unless the range overlaps an existing booking of the spot,
    /// in which case it fails with `StoreError::Overlap`.
    async fn create(&self, booking: NewBooking) -> StoreResult<Booking>;

    async fn list_for_user(&self, user_id: Uuid) -> StoreResult<Vec<Booking>>;

    async fn find(&self, id: Uuid) -> StoreResult<Option<Booking>>;

    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct PgBookingStore {
    db: PgPool,
}

impl PgBookingStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn create(&self, booking: NewBooking) -> StoreResult<Booking> {
        let mut tx = self.db.begin().await?;

        // Row lock on the spot serializes concurrent bookings of it.
        sqlx::query("SELECT id FROM spots WHERE id = $1 FOR UPDATE")
            .bind(booking.spot_id)
            .execute(&mut *tx)
            .await?;

        let (conflicts,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
              FROM bookings
             WHERE spot_id = $1 AND start_date < $3 AND end_date > $2
            "#,
        )
        .bind(booking.spot_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .fetch_one(&mut *tx)
        .await?;
        if conflicts > 0 {
            return Err(StoreError::Overlap);
        }

        let created = sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings (spot_id, user_id, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking.spot_id)
        .bind(booking.user_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(classify)?;

        tx.commit().await?;
        Ok(created)
    }

    async fn list_for_user(&self, user_id: Uuid) -> StoreResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY start_date ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Booking>> {
        let row = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
