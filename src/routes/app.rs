//! Application shell: resource routers by path prefix, body limit, tracing, 404 fallback.
//! Every error from every handler, and the fallback, is rendered by `AppError::into_response`.

use super::{common_routes, company_routes, industry_routes, invoice_routes};
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// The routed service. Trailing slashes are trimmed before routing, so `/companies/` and
/// `/companies` reach the same handler.
pub type App = NormalizePath<Router>;

/// Reached when no route matched, and when a route matched but not its method.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}

pub fn app(state: AppState, body_limit_bytes: usize) -> App {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/companies", company_routes(state.clone()))
        .nest("/invoices", invoice_routes(state.clone()))
        .nest("/industries", industry_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
