//! Company operations.

use crate::error::AppError;
use crate::model::{Company, CompanyDetail, CompanyPayload, CompanySummary, IndustryCode};
use crate::slug::slugify;
use crate::store::BizStore;
use serde::Serialize;

/// Response body of GET /companies/:code.
#[derive(Debug, Serialize)]
pub struct CompanyView {
    pub company: CompanyDetail,
    pub industries: Vec<IndustryCode>,
}

fn no_such_company(code: &str) -> AppError {
    AppError::NotFound(format!("No such company: {}", code))
}

pub struct CompanyService;

impl CompanyService {
    /// All companies ordered by name.
    pub async fn list(store: &dyn BizStore) -> Result<Vec<CompanySummary>, AppError> {
        store.list_companies().await
    }

    /// Company by code with its invoice ids and industry codes. Three sequential lookups,
    /// not atomic with respect to concurrent writers.
    pub async fn get(store: &dyn BizStore, code: &str) -> Result<CompanyView, AppError> {
        let company = store
            .find_company(code)
            .await?
            .ok_or_else(|| no_such_company(code))?;
        let invoices = store.invoice_ids_for_company(code).await?;
        let industries = store.industry_codes_for_company(code).await?;
        Ok(CompanyView {
            company: CompanyDetail { company, invoices },
            industries,
        })
    }

    /// Insert a company whose code is the slug of its name. Duplicate codes are left to the
    /// store's primary key.
    pub async fn create(store: &dyn BizStore, payload: CompanyPayload) -> Result<Company, AppError> {
        let code = slugify(&payload.name);
        if code.is_empty() {
            return Err(AppError::BadRequest(
                "name must contain at least one letter or digit".into(),
            ));
        }
        let company = Company {
            code,
            name: payload.name,
            description: payload.description,
        };
        let created = store.insert_company(&company).await?;
        tracing::info!(code = %created.code, "company created");
        Ok(created)
    }

    pub async fn update(
        store: &dyn BizStore,
        code: &str,
        payload: CompanyPayload,
    ) -> Result<Company, AppError> {
        store
            .update_company(code, &payload.name, payload.description.as_deref())
            .await?
            .ok_or_else(|| no_such_company(code))
    }

    pub async fn delete(store: &dyn BizStore, code: &str) -> Result<(), AppError> {
        store
            .delete_company(code)
            .await?
            .ok_or_else(|| no_such_company(code))?;
        tracing::info!(code = %code, "company deleted");
        Ok(())
    }
}
