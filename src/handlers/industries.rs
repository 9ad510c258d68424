//! Industry handlers.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Industry;
use crate::response::ok;
use crate::service::IndustryService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct IndustryBody {
    pub industry: Industry,
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let listing = IndustryService::list(state.store.as_ref()).await?;
    Ok(ok(listing))
}

/// Responds 200 with the inserted row.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(industry): JsonBody<Industry>,
) -> Result<impl IntoResponse, AppError> {
    let industry = IndustryService::create(state.store.as_ref(), industry).await?;
    Ok(ok(IndustryBody { industry }))
}
