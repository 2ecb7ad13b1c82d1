use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{
    dto::SignupRequest,
    repo_types::{CurrentUser, NewUser, SafeUser},
    validation::validate_signup,
};
use crate::{
    auth::password,
    db::StoreError,
    error::{ApiError, FieldErrors},
    state::AppState,
};

/// Validates, hashes and inserts a new user.
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn signup(state: &AppState, request: SignupRequest) -> Result<CurrentUser, ApiError> {
    validate_signup(&request).into_result()?;

    let hashed_password =
        password::hash_password_blocking(request.password, state.config.bcrypt_cost).await?;

    let new_user = NewUser {
        first_name: request.first_name,
        last_name: request.last_name,
        username: request.username,
        email: request.email,
        hashed_password,
    };

    match state.users.create(new_user).await {
        Ok(user) => {
            info!(user_id = %user.id, "user signed up");
            Ok(user)
        }
        Err(StoreError::Duplicate(field)) => {
            debug!(field, "signup rejected: duplicate");
            Err(ApiError::Duplicate(
                "User already exists",
                FieldErrors::single(field, format!("User with that {field} already exists")),
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns the user for a matching credential and password, `None` otherwise.
#[instrument(skip(state, password))]
pub async fn login(
    state: &AppState,
    credential: &str,
    password: &str,
) -> Result<Option<CurrentUser>, ApiError> {
    let Some(user) = state.users.find_for_login(credential).await? else {
        debug!("no user for credential");
        return Ok(None);
    };
    if !user.validate_password(password).await? {
        debug!(user_id = %user.id, "password mismatch");
        return Ok(None);
    }
    Ok(Some(user.to_safe_object()))
}

pub async fn get_current_user_by_id(
    state: &AppState,
    id: Uuid,
) -> Result<Option<CurrentUser>, ApiError> {
    Ok(state.users.find_current_by_id(id).await?)
}

pub async fn get_safe_user_by_id(state: &AppState, id: Uuid) -> Result<Option<SafeUser>, ApiError> {
    Ok(state.users.find_safe_by_id(id).await?)
}

#[instrument(skip(state))]
pub async fn delete_user(state: &AppState, id: Uuid) -> Result<(), ApiError> {
    if !state.users.delete(id).await? {
        return Err(ApiError::NotFound("User couldn't be found"));
    }
    info!(user_id = %id, "user deleted");
    Ok(())
}
