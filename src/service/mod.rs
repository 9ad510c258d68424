//! Resource services: request semantics on top of a [`crate::store::BizStore`].

mod companies;
mod industries;
mod invoices;
pub use companies::{CompanyService, CompanyView};
pub use industries::{IndustryListing, IndustryService};
pub use invoices::InvoiceService;
