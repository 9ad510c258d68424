//! Industry routes, mounted under /industries.

use super::not_found;
use crate::handlers::industries::{create, list};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn industry_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create).fallback(not_found))
        .with_state(state)
}
