//! Shared application state for all routes.

use crate::store::BizStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The only handle to persisted data; injected at startup, never global.
    pub store: Arc<dyn BizStore>,
}

impl AppState {
    pub fn new(store: impl BizStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
