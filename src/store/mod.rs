//! Data access seam. Handlers and services only see [`BizStore`]; the PostgreSQL pool lives
//! behind [`PgStore`]; tests run against `MemoryStore` (feature `test-util`).

#[cfg(any(test, feature = "test-util"))]
mod memory;
mod pg;
mod schema;

#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryStore;
pub use pg::PgStore;
pub use schema::{ensure_database_exists, ensure_schema};

use crate::error::AppError;
use crate::model::{
    Company, CompanySummary, Industry, IndustryCode, IndustryCompany, Invoice, InvoiceSummary,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// One method per SQL statement. Keyed writes return `None` when no row matched.
#[async_trait]
pub trait BizStore: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError>;
    async fn find_company(&self, code: &str) -> Result<Option<Company>, AppError>;
    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>, AppError>;
    async fn industry_codes_for_company(&self, code: &str) -> Result<Vec<IndustryCode>, AppError>;
    async fn insert_company(&self, company: &Company) -> Result<Company, AppError>;
    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>, AppError>;
    async fn delete_company(&self, code: &str) -> Result<Option<String>, AppError>;

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError>;
    async fn find_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError>;
    async fn insert_invoice(&self, comp_code: &str, amt: f64) -> Result<Invoice, AppError>;
    async fn update_invoice(
        &self,
        id: i32,
        amt: f64,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>, AppError>;
    async fn delete_invoice(&self, id: i32) -> Result<Option<i32>, AppError>;

    async fn list_industry_companies(&self) -> Result<Vec<IndustryCompany>, AppError>;
    async fn insert_industry(&self, industry: &Industry) -> Result<Industry, AppError>;
}
