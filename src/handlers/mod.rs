//! HTTP handlers for the company, invoice and industry resources.

pub mod companies;
pub mod industries;
pub mod invoices;
