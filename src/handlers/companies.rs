//! Company handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Company, CompanyPayload, CompanySummary};
use crate::response::{created, deleted, ok};
use crate::service::CompanyService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct CompaniesBody {
    pub companies: Vec<CompanySummary>,
}

#[derive(Serialize)]
pub struct CompanyBody {
    pub company: Company,
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let companies = CompanyService::list(state.store.as_ref()).await?;
    Ok(ok(CompaniesBody { companies }))
}

pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = CompanyService::get(state.store.as_ref(), &code).await?;
    Ok(ok(view))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::create(state.store.as_ref(), payload).await?;
    Ok(created(CompanyBody { company }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    JsonBody(payload): JsonBody<CompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::update(state.store.as_ref(), &code, payload).await?;
    Ok(ok(CompanyBody { company }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CompanyService::delete(state.store.as_ref(), &code).await?;
    Ok(deleted())
}
