//! Response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{"status": "deleted"}`
#[derive(Serialize)]
pub struct Deleted {
    pub status: &'static str,
}

pub fn created<T: Serialize>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(body))
}

pub fn ok<T: Serialize>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(body))
}

pub fn deleted() -> (StatusCode, Json<Deleted>) {
    ok(Deleted { status: "deleted" })
}
