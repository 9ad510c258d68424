//! PostgreSQL implementation of [`BizStore`]: one parameterized statement per call.

use super::BizStore;
use crate::error::AppError;
use crate::model::{
    Company, CompanySummary, Industry, IndustryCode, IndustryCompany, Invoice, InvoiceSummary,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BizStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError> {
        let sql = "SELECT code, name FROM companies ORDER BY name";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, CompanySummary>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_company(&self, code: &str) -> Result<Option<Company>, AppError> {
        let sql = "SELECT code, name, description FROM companies WHERE code = $1";
        tracing::debug!(sql = %sql, params = ?[code], "query");
        let row = sqlx::query_as::<_, Company>(sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>, AppError> {
        let sql = "SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id";
        tracing::debug!(sql = %sql, params = ?[code], "query");
        let ids = sqlx::query_scalar::<_, i32>(sql)
            .bind(code)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    async fn industry_codes_for_company(&self, code: &str) -> Result<Vec<IndustryCode>, AppError> {
        let sql = "SELECT industry_code FROM industry_company WHERE company_code = $1";
        tracing::debug!(sql = %sql, params = ?[code], "query");
        let rows = sqlx::query_as::<_, IndustryCode>(sql)
            .bind(code)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_company(&self, company: &Company) -> Result<Company, AppError> {
        let sql = "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
                   RETURNING code, name, description";
        tracing::debug!(sql = %sql, params = ?company, "query");
        let row = sqlx::query_as::<_, Company>(sql)
            .bind(&company.code)
            .bind(&company.name)
            .bind(company.description.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>, AppError> {
        let sql = "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
                   RETURNING code, name, description";
        tracing::debug!(sql = %sql, params = ?(name, description, code), "query");
        let row = sqlx::query_as::<_, Company>(sql)
            .bind(name)
            .bind(description)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_company(&self, code: &str) -> Result<Option<String>, AppError> {
        let sql = "DELETE FROM companies WHERE code = $1 RETURNING code";
        tracing::debug!(sql = %sql, params = ?[code], "query");
        let deleted = sqlx::query_scalar::<_, String>(sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        let sql = "SELECT id, comp_code FROM invoices ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, InvoiceSummary>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        let sql = format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1");
        tracing::debug!(sql = %sql, params = ?[id], "query");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_invoice(&self, comp_code: &str, amt: f64) -> Result<Invoice, AppError> {
        let sql = format!(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {INVOICE_COLUMNS}"
        );
        tracing::debug!(sql = %sql, params = ?(comp_code, amt), "query");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(comp_code)
            .bind(amt)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_invoice(
        &self,
        id: i32,
        amt: f64,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>, AppError> {
        let sql = format!(
            "UPDATE invoices SET amt = $1, paid = $2, paid_date = $3 WHERE id = $4 \
             RETURNING {INVOICE_COLUMNS}"
        );
        tracing::debug!(sql = %sql, params = ?(amt, paid, paid_date, id), "query");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(amt)
            .bind(paid)
            .bind(paid_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_invoice(&self, id: i32) -> Result<Option<i32>, AppError> {
        let sql = "DELETE FROM invoices WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, params = ?[id], "query");
        let deleted = sqlx::query_scalar::<_, i32>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }

    async fn list_industry_companies(&self) -> Result<Vec<IndustryCompany>, AppError> {
        let sql = "SELECT company_code, industry_code FROM industry_company";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, IndustryCompany>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_industry(&self, industry: &Industry) -> Result<Industry, AppError> {
        let sql = "INSERT INTO industries (code, industry) VALUES ($1, $2) RETURNING code, industry";
        tracing::debug!(sql = %sql, params = ?industry, "query");
        let row = sqlx::query_as::<_, Industry>(sql)
            .bind(&industry.code)
            .bind(&industry.industry)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}
