//! Company routes, mounted under /companies.

use super::not_found;
use crate::handlers::companies::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn company_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create).fallback(not_found))
        .route("/:code", get(read).put(update).delete(delete).fallback(not_found))
        .with_state(state)
}
