use std::sync::Arc;

use crate::documents::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document storage backend. Default: `PgDocumentStore`; constructed once in `main`.
    pub store: Arc<dyn DocumentStore>,
}
