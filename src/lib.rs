//! BizTime: REST API over companies, invoices and industries stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod slug;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{app, App};
pub use slug::slugify;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema, BizStore, PgStore};
#[cfg(any(test, feature = "test-util"))]
pub use store::MemoryStore;
