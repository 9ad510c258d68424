//! Routers per resource and the application shell that assembles them.

mod app;
mod common;
mod companies;
mod industries;
mod invoices;

pub use app::{app, not_found, App};
pub use common::common_routes;
pub use companies::company_routes;
pub use industries::industry_routes;
pub use invoices::invoice_routes;
