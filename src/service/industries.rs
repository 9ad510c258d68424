//! Industry operations.

use crate::error::AppError;
use crate::model::{Industry, IndustryCompany};
use crate::store::BizStore;
use serde::Serialize;

/// Response body of GET /industries.
///
/// Holds only the first association row even though every row is fetched; `None` when the
/// join table is empty.
#[derive(Debug, Serialize)]
pub struct IndustryListing {
    #[serde(rename = "Industry / Company")]
    pub first: Option<IndustryCompany>,
}

pub struct IndustryService;

impl IndustryService {
    pub async fn list(store: &dyn BizStore) -> Result<IndustryListing, AppError> {
        let rows = store.list_industry_companies().await?;
        tracing::debug!(rows = rows.len(), "industry associations fetched");
        Ok(IndustryListing {
            first: rows.into_iter().next(),
        })
    }

    pub async fn create(store: &dyn BizStore, industry: Industry) -> Result<Industry, AppError> {
        let created = store.insert_industry(&industry).await?;
        tracing::info!(code = %created.code, "industry created");
        Ok(created)
    }
}
