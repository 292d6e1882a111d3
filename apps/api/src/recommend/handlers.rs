//! Axum route handlers for the Recommendations API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::recommend::models::RecommendedDocument;
use crate::recommend::tag_search::search_documents_by_tags;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TagSearchRequest {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// POST /api/v1/recommendations/tags
///
/// Always 200: an empty list covers both "nothing relevant" and "store unreachable".
pub async fn handle_tag_search(
    State(state): State<AppState>,
    Json(request): Json<TagSearchRequest>,
) -> Json<Vec<RecommendedDocument>> {
    Json(search_documents_by_tags(state.store.as_ref(), &request.tags).await)
}
