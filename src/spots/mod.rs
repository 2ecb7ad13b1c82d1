use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use repo::{PgSpotStore, SpotStore};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::spot_routes())
}
