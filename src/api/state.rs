//! API server state

use std::sync::Arc;

use crate::catalog::Catalog;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog shared across handlers
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
