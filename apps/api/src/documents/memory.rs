//! In-memory `DocumentStore` backends used by unit and router tests.

use std::cmp::Reverse;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::documents::models::{DocumentPatch, NewDocument};
use crate::documents::store::DocumentStore;
use crate::errors::StoreError;
use crate::models::document::{DocumentRow, DocumentStatus};

/// Mirrors `PgDocumentStore` semantics over a `Vec`.
#[derive(Default)]
pub struct MemoryDocumentStore {
    rows: Mutex<Vec<DocumentRow>>,
    tag_queries: AtomicUsize,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<DocumentRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            tag_queries: AtomicUsize::new(0),
        }
    }

    /// Number of times `find_overlapping_tags` has been called.
    pub fn tag_queries(&self) -> usize {
        self.tag_queries.load(Ordering::SeqCst)
    }
}

fn newest_first(rows: &mut [DocumentRow]) {
    rows.sort_by_key(|r| Reverse((r.created_at, r.id)));
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, owner: Uuid, doc: NewDocument) -> Result<DocumentRow, StoreError> {
        let now = Utc::now();
        let row = DocumentRow {
            id: Uuid::new_v4(),
            user_id: owner,
            title: doc.title,
            company: doc.company,
            role: doc.role,
            content: doc.content,
            status: doc.status,
            tags: doc.tags,
            job_post_url: doc.job_post_url,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_for_owner(
        &self,
        owner: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<DocumentRow>, StoreError> {
        let needle = search.map(str::to_lowercase);
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == owner)
            .filter(|r| match &needle {
                Some(n) => {
                    r.company.to_lowercase().contains(n.as_str())
                        || r.role.to_lowercase().contains(n.as_str())
                }
                None => true,
            })
            .cloned()
            .collect();
        newest_first(&mut rows);
        Ok(rows)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<DocumentRow>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id && r.user_id == owner)
            .cloned())
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: DocumentPatch,
    ) -> Result<Option<DocumentRow>, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id && r.user_id == owner) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            row.title = title;
        }
        if let Some(company) = patch.company {
            row.company = company;
        }
        if let Some(role) = patch.role {
            row.role = role;
        }
        if let Some(content) = patch.content {
            row.content = content;
        }
        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(tags) = patch.tags {
            row.tags = tags;
        }
        if let Some(job_post_url) = patch.job_post_url {
            row.job_post_url = job_post_url;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id == id && r.user_id == owner));
        Ok(rows.len() < before)
    }

    async fn find_overlapping_tags(
        &self,
        tags: &[String],
        limit: usize,
    ) -> Result<Vec<DocumentRow>, StoreError> {
        self.tag_queries.fetch_add(1, Ordering::SeqCst);
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.tags.iter().any(|t| tags.contains(t)))
            .cloned()
            .collect();
        newest_first(&mut rows);
        rows.truncate(limit);
        Ok(rows)
    }
}

/// Every call fails as if the database were unreachable.
pub struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert(&self, _owner: Uuid, _doc: NewDocument) -> Result<DocumentRow, StoreError> {
        Err(down())
    }

    async fn list_for_owner(
        &self,
        _owner: Uuid,
        _search: Option<&str>,
    ) -> Result<Vec<DocumentRow>, StoreError> {
        Err(down())
    }

    async fn get(&self, _owner: Uuid, _id: Uuid) -> Result<Option<DocumentRow>, StoreError> {
        Err(down())
    }

    async fn update(
        &self,
        _owner: Uuid,
        _id: Uuid,
        _patch: DocumentPatch,
    ) -> Result<Option<DocumentRow>, StoreError> {
        Err(down())
    }

    async fn delete(&self, _owner: Uuid, _id: Uuid) -> Result<bool, StoreError> {
        Err(down())
    }

    async fn find_overlapping_tags(
        &self,
        _tags: &[String],
        _limit: usize,
    ) -> Result<Vec<DocumentRow>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

/// Builds a stored row with a fixed creation time, for seeding stores.
pub fn row_at(owner: Uuid, company: &str, tags: &[&str], created_at: DateTime<Utc>) -> DocumentRow {
    DocumentRow {
        id: Uuid::new_v4(),
        user_id: owner,
        title: format!("{company} cover letter"),
        company: company.to_string(),
        role: "Software Engineer".to_string(),
        content: format!("Why I want to work at {company}."),
        status: DocumentStatus::Pending,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        job_post_url: None,
        created_at,
        updated_at: created_at,
    }
}
