use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::config::AppConfig;

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("connect to database")
}

pub async fn migrate(db: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("run migrations")
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the row; carries the camelCase field name.
    #[error("duplicate {0}")]
    Duplicate(&'static str),
    /// A foreign key pointed at a row that no longer exists; carries
    /// `"user"` or `"spot"`.
    #[error("referenced {0} does not exist")]
    MissingParent(&'static str),
    #[error("booking dates overlap an existing booking")]
    Overlap,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Unique constraint names from `migrations/` and the field each guards.
const UNIQUE_CONSTRAINTS: &[(&str, &str)] = &[
    ("users_email_key", "email"),
    ("users_username_key", "username"),
    ("reviews_user_id_spot_id_key", "review"),
];

/// Foreign key names from `migrations/` and the parent each points at.
const FOREIGN_KEYS: &[(&str, &str)] = &[
    ("spots_owner_id_fkey", "user"),
    ("reviews_user_id_fkey", "user"),
    ("bookings_user_id_fkey", "user"),
    ("spot_images_spot_id_fkey", "spot"),
    ("reviews_spot_id_fkey", "spot"),
    ("bookings_spot_id_fkey", "spot"),
];

fn lookup(table: &[(&str, &'static str)], constraint: Option<&str>) -> Option<&'static str> {
    let name = constraint?;
    table.iter().find(|(c, _)| *c == name).map(|(_, v)| *v)
}

/// Maps unique and foreign-key violations on known constraints to their
/// `StoreError` variants, passing anything else through.
pub fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if let Some(field) = lookup(UNIQUE_CONSTRAINTS, db_err.constraint()) {
                return StoreError::Duplicate(field);
            }
        }
        if db_err.is_foreign_key_violation() {
            if let Some(parent) = lookup(FOREIGN_KEYS, db_err.constraint()) {
                return StoreError::MissingParent(parent);
            }
        }
    }
    StoreError::Database(err)
}
