use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::password::{self, HashedPassword};

/// Full user row, hash included. Only the login lookup loads it and it
/// has no `Serialize` impl.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl User {
    /// Compares `plain` against the stored bcrypt hash.
    pub async fn validate_password(&self, plain: &str) -> anyhow::Result<bool> {
        password::verify_password_blocking(plain.to_owned(), self.hashed_password.clone()).await
    }

    pub fn to_safe_object(&self) -> CurrentUser {
        CurrentUser {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}

/// The signed-in user's own view: everything but the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

/// Public view of a user shown to others: no email, no hash, no timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl From<CurrentUser> for SafeUser {
    fn from(u: CurrentUser) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            username: u.username,
        }
    }
}

/// A validated user ready for insertion.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub hashed_password: HashedPassword,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            first_name: "Demo".into(),
            last_name: "Lition".into(),
            email: "demo@user.io".into(),
            username: "Demo-lition".into(),
        }
    }

    #[test]
    fn current_user_json_omits_hash() {
        let json = serde_json::to_value(current()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("hashedPassword"));
        assert_eq!(obj["firstName"], "Demo");
        assert_eq!(obj["email"], "demo@user.io");
    }

    #[test]
    fn safe_user_json_omits_email_and_hash() {
        let json = serde_json::to_value(SafeUser::from(current())).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("email"));
        assert!(!obj.contains_key("hashedPassword"));
        assert!(!obj.contains_key("createdAt"));
        assert_eq!(obj["username"], "Demo-lition");
    }

    #[tokio::test]
    async fn validate_password_and_safe_object() {
        let hash = password::hash_password("password", 4).unwrap();
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Demo".into(),
            last_name: "Lition".into(),
            username: "Demo-lition".into(),
            email: "demo@user.io".into(),
            hashed_password: hash.as_str().to_owned(),
            created_at: now,
            updated_at: now,
        };
        assert!(user.validate_password("password").await.unwrap());
        assert!(!user.validate_password("Password").await.unwrap());

        let safe = user.to_safe_object();
        assert_eq!(safe.id, user.id);
        assert_eq!(safe.email, user.email);
    }
}
