use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{CurrentUser, NewUser, SafeUser, User};
use crate::db::{classify, StoreResult};

/// Persistence for users. Each lookup returns exactly one projection:
/// `User` (with hash) for login, `CurrentUser` for the owner, `SafeUser`
/// for everyone else.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: NewUser) -> StoreResult<CurrentUser>;

    /// Looks up by email or username.
    async fn find_for_login(&self, credential: &str) -> StoreResult<Option<User>>;

    async fn find_current_by_id(&self, id: Uuid) -> StoreResult<Option<CurrentUser>>;

    async fn find_safe_by_id(&self, id: Uuid) -> StoreResult<Option<SafeUser>>;

    /// Deletes the user; spots, reviews and bookings cascade. Returns
    /// whether a row was removed.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<CurrentUser> {
        sqlx::query_as::<_, CurrentUser>(
            r#"
            INSERT INTO users (first_name, last_name, username, email, hashed_password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, username
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.hashed_password.as_str())
        .fetch_one(&self.db)
        .await
        .map_err(classify)
    }

    async fn find_for_login(&self, credential: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, username, email, hashed_password,
                   created_at, updated_at
            FROM users
            WHERE email = lower($1) OR username = $1
            LIMIT 1
            "#,
        )
        .bind(credential)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_current_by_id(&self, id: Uuid) -> StoreResult<Option<CurrentUser>> {
        let user = sqlx::query_as::<_, CurrentUser>(
            r#"SELECT id, first_name, last_name, email, username FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_safe_by_id(&self, id: Uuid) -> StoreResult<Option<SafeUser>> {
        let user = sqlx::query_as::<_, SafeUser>(
            r#"SELECT id, first_name, last_name, username FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
