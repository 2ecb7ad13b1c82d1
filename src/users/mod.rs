use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod validation;

pub use repo::{PgUserStore, UserStore};
pub use repo_types::{CurrentUser, SafeUser};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::user_routes())
}
