//! In-process store with the same key and foreign-key rules as the PostgreSQL schema.
//! Used by the router tests; constraint violations surface as `AppError::Internal`, like a
//! database error would.

use super::BizStore;
use crate::error::AppError;
use crate::model::{
    Company, CompanySummary, Industry, IndustryCode, IndustryCompany, Invoice, InvoiceSummary,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    companies: Vec<Company>,
    invoices: Vec<Invoice>,
    industries: Vec<Industry>,
    industry_company: Vec<IndustryCompany>,
    next_invoice_id: i32,
}

/// Cheap to clone; clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

fn violation(constraint: &str, detail: String) -> AppError {
    AppError::Internal(format!("constraint \"{constraint}\" violated: {detail}"))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    /// Add an industry/company association. There is no HTTP route for this; tests seed with it.
    pub fn tag_company(&self, company_code: &str, industry_code: &str) -> Result<(), AppError> {
        let mut tables = self.write()?;
        if !tables.companies.iter().any(|c| c.code == company_code) {
            return Err(violation(
                "industry_company_company_code_fkey",
                format!("company {company_code} does not exist"),
            ));
        }
        if !tables.industries.iter().any(|i| i.code == industry_code) {
            return Err(violation(
                "industry_company_industry_code_fkey",
                format!("industry {industry_code} does not exist"),
            ));
        }
        if tables
            .industry_company
            .iter()
            .any(|r| r.company_code == company_code && r.industry_code == industry_code)
        {
            return Err(violation(
                "industry_company_pkey",
                format!("({company_code}, {industry_code}) already exists"),
            ));
        }
        tables.industry_company.push(IndustryCompany {
            company_code: company_code.to_string(),
            industry_code: industry_code.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl BizStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError> {
        let tables = self.read()?;
        let mut rows: Vec<CompanySummary> = tables
            .companies
            .iter()
            .map(|c| CompanySummary {
                code: c.code.clone(),
                name: c.name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_company(&self, code: &str) -> Result<Option<Company>, AppError> {
        let tables = self.read()?;
        Ok(tables.companies.iter().find(|c| c.code == code).cloned())
    }

    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .iter()
            .filter(|i| i.comp_code == code)
            .map(|i| i.id)
            .collect())
    }

    async fn industry_codes_for_company(&self, code: &str) -> Result<Vec<IndustryCode>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .industry_company
            .iter()
            .filter(|r| r.company_code == code)
            .map(|r| IndustryCode {
                industry_code: r.industry_code.clone(),
            })
            .collect())
    }

    async fn insert_company(&self, company: &Company) -> Result<Company, AppError> {
        let mut tables = self.write()?;
        if tables.companies.iter().any(|c| c.code == company.code) {
            return Err(violation(
                "companies_pkey",
                format!("key (code)=({}) already exists", company.code),
            ));
        }
        tables.companies.push(company.clone());
        Ok(company.clone())
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>, AppError> {
        let mut tables = self.write()?;
        let Some(company) = tables.companies.iter_mut().find(|c| c.code == code) else {
            return Ok(None);
        };
        company.name = name.to_string();
        company.description = description.map(str::to_string);
        Ok(Some(company.clone()))
    }

    async fn delete_company(&self, code: &str) -> Result<Option<String>, AppError> {
        let mut tables = self.write()?;
        let before = tables.companies.len();
        tables.companies.retain(|c| c.code != code);
        if tables.companies.len() == before {
            return Ok(None);
        }
        // ON DELETE CASCADE
        tables.invoices.retain(|i| i.comp_code != code);
        tables.industry_company.retain(|r| r.company_code != code);
        Ok(Some(code.to_string()))
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .iter()
            .map(|i| InvoiceSummary {
                id: i.id,
                comp_code: i.comp_code.clone(),
            })
            .collect())
    }

    async fn find_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        let tables = self.read()?;
        Ok(tables.invoices.iter().find(|i| i.id == id).cloned())
    }

    async fn insert_invoice(&self, comp_code: &str, amt: f64) -> Result<Invoice, AppError> {
        let mut tables = self.write()?;
        if !tables.companies.iter().any(|c| c.code == comp_code) {
            return Err(violation(
                "invoices_comp_code_fkey",
                format!("company {comp_code} does not exist"),
            ));
        }
        if amt <= 0.0 {
            return Err(violation("invoices_amt_check", format!("amt {amt} is not positive")));
        }
        tables.next_invoice_id += 1;
        let invoice = Invoice {
            id: tables.next_invoice_id,
            comp_code: comp_code.to_string(),
            amt,
            paid: false,
            add_date: chrono::Local::now().date_naive(),
            paid_date: None,
        };
        tables.invoices.push(invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: i32,
        amt: f64,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>, AppError> {
        let mut tables = self.write()?;
        let Some(invoice) = tables.invoices.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        if amt <= 0.0 {
            return Err(violation("invoices_amt_check", format!("amt {amt} is not positive")));
        }
        invoice.amt = amt;
        invoice.paid = paid;
        invoice.paid_date = paid_date;
        Ok(Some(invoice.clone()))
    }

    async fn delete_invoice(&self, id: i32) -> Result<Option<i32>, AppError> {
        let mut tables = self.write()?;
        let before = tables.invoices.len();
        tables.invoices.retain(|i| i.id != id);
        Ok((tables.invoices.len() != before).then_some(id))
    }

    async fn list_industry_companies(&self) -> Result<Vec<IndustryCompany>, AppError> {
        let tables = self.read()?;
        Ok(tables.industry_company.clone())
    }

    async fn insert_industry(&self, industry: &Industry) -> Result<Industry, AppError> {
        let mut tables = self.write()?;
        if tables.industries.iter().any(|i| i.code == industry.code) {
            return Err(violation(
                "industries_pkey",
                format!("key (code)=({}) already exists", industry.code),
            ));
        }
        tables.industries.push(industry.clone());
        Ok(industry.clone())
    }
}
