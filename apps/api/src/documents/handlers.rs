use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::documents::models::{DocumentPatch, NewDocument};
use crate::errors::AppError;
use crate::models::document::DocumentRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct ListDocumentsQuery {
    pub user_id: Uuid,
    /// Case-insensitive substring matched against company and role.
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateDocumentRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub document: NewDocument,
}

#[derive(Deserialize)]
pub struct UpdateDocumentRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub patch: DocumentPatch,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Document {id} not found"))
}

/// GET /api/v1/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
    Query(params): Query<ListDocumentsQuery>,
) -> Result<Json<Vec<DocumentRow>>, AppError> {
    let search = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    Ok(Json(state.store.list_for_owner(params.user_id, search).await?))
}

/// POST /api/v1/documents
pub async fn handle_create_document(
    State(state): State<AppState>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentRow>), AppError> {
    let document = req.document.normalized()?;
    let row = state.store.insert(req.user_id, document).await?;
    tracing::info!("Created document {} for user {}", row.id, req.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DocumentRow>, AppError> {
    state
        .store
        .get(params.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// PATCH /api/v1/documents/:id
pub async fn handle_update_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<DocumentRow>, AppError> {
    let patch = req.patch.normalized()?;
    state
        .store
        .update(req.user_id, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// DELETE /api/v1/documents/:id
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(params.user_id, id).await? {
        return Err(not_found(id));
    }
    tracing::info!("Deleted document {id} for user {}", params.user_id);
    Ok(StatusCode::NO_CONTENT)
}
