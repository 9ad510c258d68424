//! Invoice handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Invoice, InvoiceDetail, InvoiceSummary, InvoiceUpdate, NewInvoice};
use crate::response::{created, deleted, ok};
use crate::service::InvoiceService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct InvoicesBody {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Serialize)]
pub struct InvoiceBody<T> {
    pub invoice: T,
}

/// A non-numeric id cannot name an invoice, so it is reported the same way as an unknown one.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("No such invoice: {}", raw)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let invoices = InvoiceService::list(state.store.as_ref()).await?;
    Ok(ok(InvoicesBody { invoices }))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoice: InvoiceDetail = InvoiceService::get(state.store.as_ref(), parse_id(&id)?).await?;
    Ok(ok(InvoiceBody { invoice }))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewInvoice>,
) -> Result<impl IntoResponse, AppError> {
    let invoice: Invoice = InvoiceService::create(state.store.as_ref(), payload).await?;
    Ok(created(InvoiceBody { invoice }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<InvoiceUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = InvoiceService::update(state.store.as_ref(), parse_id(&id)?, payload).await?;
    Ok(ok(InvoiceBody { invoice }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    InvoiceService::delete(state.store.as_ref(), parse_id(&id)?).await?;
    Ok(deleted())
}
