//! Row types for companies, invoices, industries and their join, plus request payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// Company with the ids of every invoice billed to it.
#[derive(Clone, Debug, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Invoice with its company inlined in place of `comp_code`.
#[derive(Clone, Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Company) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct IndustryCompany {
    pub company_code: String,
    pub industry_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct IndustryCode {
    pub industry_code: String,
}

/// Body of POST and PUT /companies.
#[derive(Debug, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    pub description: Option<String>,
}

/// Body of POST /invoices.
#[derive(Debug, Deserialize)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Body of PUT /invoices/:id. `paid` left out keeps the current state.
#[derive(Debug, Deserialize)]
pub struct InvoiceUpdate {
    pub amt: f64,
    pub paid: Option<bool>,
}
