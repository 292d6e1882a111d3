pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::documents::handlers;
use crate::recommend::handlers::handle_tag_search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Documents API
        .route(
            "/api/v1/documents",
            get(handlers::handle_list_documents).post(handlers::handle_create_document),
        )
        .route(
            "/api/v1/documents/:id",
            get(handlers::handle_get_document)
                .patch(handlers::handle_update_document)
                .delete(handlers::handle_delete_document),
        )
        // Recommendations API
        .route("/api/v1/recommendations/tags", post(handle_tag_search))
        .with_state(state)
}
