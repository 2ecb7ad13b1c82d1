use serde::{Deserialize, Serialize};

use crate::users::CurrentUser;

/// Request body for login. `credential` is an email or a username.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub credential: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned after signup, login or refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: CurrentUser,
}

/// Returned by session restore; `user` is null for anonymous callers.
#[derive(Debug, Serialize)]
pub struct RestoreResponse {
    pub user: Option<CurrentUser>,
}
