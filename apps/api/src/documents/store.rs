//! Document store — the one seam between the API and persistent storage.
//!
//! Default: `PgDocumentStore` (Postgres via sqlx, `TEXT[]` tags with a GIN index).
//! Tests swap in the in-memory store from `documents::memory`.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`, built once at startup.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::documents::models::{DocumentPatch, NewDocument};
use crate::errors::StoreError;
use crate::models::document::DocumentRow;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, owner: Uuid, doc: NewDocument) -> Result<DocumentRow, StoreError>;

    /// All documents owned by `owner`, newest first. When `search` is set, only
    /// documents whose company or role contains it (case-insensitive) are kept.
    async fn list_for_owner(
        &self,
        owner: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<DocumentRow>, StoreError>;

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<DocumentRow>, StoreError>;

    /// Applies only the supplied fields and refreshes `updated_at`.
    /// Returns `None` when no document with `id` belongs to `owner`.
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: DocumentPatch,
    ) -> Result<Option<DocumentRow>, StoreError>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, StoreError>;

    /// Documents sharing at least one tag with `tags`, ordered by
    /// `created_at` desc then `id` desc, at most `limit` rows.
    /// Not scoped to an owner.
    async fn find_overlapping_tags(
        &self,
        tags: &[String],
        limit: usize,
    ) -> Result<Vec<DocumentRow>, StoreError>;
}

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, owner: Uuid, doc: NewDocument) -> Result<DocumentRow, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents
                (user_id, title, company, role, content, status, tags, job_post_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(owner)
        .bind(&doc.title)
        .bind(&doc.company)
        .bind(&doc.role)
        .bind(&doc.content)
        .bind(doc.status.as_str())
        .bind(&doc.tags)
        .bind(&doc.job_post_url)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted document {} for user {owner}", row.id);
        Ok(row)
    }

    async fn list_for_owner(
        &self,
        owner: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<DocumentRow>, StoreError> {
        // strpos rather than ILIKE so `%` and `_` in the search text match literally.
        Ok(sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT * FROM documents
            WHERE user_id = $1
              AND ($2::text IS NULL
                   OR strpos(lower(company), lower($2)) > 0
                   OR strpos(lower(role), lower($2)) > 0)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner)
        .bind(search)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<DocumentRow>, StoreError> {
        Ok(sqlx::query_as::<_, DocumentRow>(
            "SELECT * FROM documents WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: DocumentPatch,
    ) -> Result<Option<DocumentRow>, StoreError> {
        let (set_job_post_url, job_post_url) = match patch.job_post_url {
            Some(value) => (true, value),
            None => (false, None),
        };

        Ok(sqlx::query_as::<_, DocumentRow>(
            r#"
            UPDATE documents SET
                title        = COALESCE($3, title),
                company      = COALESCE($4, company),
                role         = COALESCE($5, role),
                content      = COALESCE($6, content),
                status       = COALESCE($7, status),
                tags         = COALESCE($8, tags),
                job_post_url = CASE WHEN $9 THEN $10 ELSE job_post_url END,
                updated_at   = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(patch.title)
        .bind(patch.company)
        .bind(patch.role)
        .bind(patch.content)
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.tags)
        .bind(set_job_post_url)
        .bind(job_post_url)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_overlapping_tags(
        &self,
        tags: &[String],
        limit: usize,
    ) -> Result<Vec<DocumentRow>, StoreError> {
        Ok(sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT * FROM documents
            WHERE tags && $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(tags)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?)
    }
}
