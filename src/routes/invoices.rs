//! Invoice routes, mounted under /invoices.

use super::not_found;
use crate::handlers::invoices::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn invoice_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create).fallback(not_found))
        .route("/:id", get(read).put(update).delete(delete).fallback(not_found))
        .with_state(state)
}
