use serde::Deserialize;

use crate::error::{ApiError, FieldErrors};

pub const PASSWORD_MISMATCH: &str = "Confirmation Password must match Password";

/// Body posted by the signup form. Missing fields deserialize as empty
/// strings so they surface as field errors instead of a rejected body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    /// Optional for API clients; when present it must equal `password`.
    pub confirm_password: Option<String>,
}

impl SignupForm {
    /// Checks the confirmation and normalizes the fields. Runs before any
    /// store access, so a mismatch never reaches the database.
    pub fn submit(self) -> Result<SignupRequest, ApiError> {
        if let Some(confirm) = &self.confirm_password {
            if *confirm != self.password {
                return Err(ApiError::Validation(FieldErrors::single(
                    "password",
                    PASSWORD_MISMATCH,
                )));
            }
        }
        Ok(SignupRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_lowercase(),
            username: self.username.trim().to_owned(),
            password: self.password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}
