use std::{borrow::Cow, collections::BTreeMap};

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::spots::services::SPOT_NOT_FOUND;

/// Validation messages keyed by the camelCase name of the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Cow<'static, str>, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`; the first message for a field wins.
    pub fn add(&mut self, field: impl Into<Cow<'static, str>>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn single(field: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self))
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(FieldErrors),
    /// A unique constraint rejected the request.
    #[error("{0}")]
    Duplicate(&'static str, FieldErrors),
    #[error("Sorry, this spot is already booked for the specified dates")]
    BookingConflict,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Duplicate(..) => StatusCode::CONFLICT,
            ApiError::BookingConflict | ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InvalidCredentials | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) | ApiError::Duplicate(_, errors) => {
                json!({ "message": self.to_string(), "errors": errors })
            }
            ApiError::BookingConflict => json!({
                "message": self.to_string(),
                "errors": {
                    "startDate": "Start date conflicts with an existing booking",
                    "endDate": "End date conflicts with an existing booking",
                },
            }),
            ApiError::Internal(e) => {
                error!(error = ?e, "internal error");
                json!({ "message": "Internal server error" })
            }
            _ => json!({ "message": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<crate::db::StoreError> for ApiError {
    fn from(e: crate::db::StoreError) -> Self {
        use crate::db::StoreError;
        match e {
            StoreError::Overlap => ApiError::BookingConflict,
            StoreError::MissingParent("user") => {
                ApiError::Unauthorized("Session user no longer exists")
            }
            StoreError::MissingParent(_) => ApiError::NotFound(SPOT_NOT_FOUND),
            StoreError::Duplicate(field) => {
                ApiError::Duplicate(
                    "Record already exists",
                    FieldErrors::single(field, format!("{field} already exists")),
                )
            }
            StoreError::Database(e) => ApiError::Internal(e.into()),
        }
    }
}

const JSON_DATA_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

fn is_field_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}

/// Body rejections become 400 validation errors. A value of the wrong type
/// is keyed by its field path; anything else is keyed `body`.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        let errors = match &rejection {
            JsonRejection::JsonDataError(_) => {
                let detail = text.strip_prefix(JSON_DATA_PREFIX).unwrap_or(&text);
                match detail.split_once(": ") {
                    Some((path, message)) if is_field_path(path) => {
                        FieldErrors::single(path.to_owned(), message)
                    }
                    _ => FieldErrors::single("body", detail),
                }
            }
            _ => FieldErrors::single("body", text.clone()),
        };
        debug!(status = %rejection.status(), "request body rejected");
        ApiError::Validation(errors)
    }
}
