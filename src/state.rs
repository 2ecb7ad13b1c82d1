use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    bookings::{BookingStore, PgBookingStore},
    config::AppConfig,
    db,
    reviews::{PgReviewStore, ReviewStore},
    spots::{PgSpotStore, SpotStore},
    users::{PgUserStore, UserStore},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub spots: Arc<dyn SpotStore>,
    pub reviews: Arc<dyn ReviewStore>,
    pub bookings: Arc<dyn BookingStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let pool = db::connect(&config).await?;

        if let Err(e) = db::migrate(&pool).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        Ok(Self::from_pool(pool, config))
    }

    pub fn from_pool(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self {
            config,
            users: Arc::new(PgUserStore::new(db.clone())),
            spots: Arc::new(PgSpotStore::new(db.clone())),
            reviews: Arc::new(PgReviewStore::new(db.clone())),
            bookings: Arc::new(PgBookingStore::new(db)),
        }
    }
}
