use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle status of a document. Stored as lowercase text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Pass,
    Fail,
}

#[derive(Debug, Error)]
#[error("Unknown document status '{0}'")]
pub struct UnknownStatus(pub String);

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Pass => "pass",
            DocumentStatus::Fail => "fail",
        }
    }
}

impl TryFrom<String> for DocumentStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(DocumentStatus::Pending),
            "pass" => Ok(DocumentStatus::Pass),
            "fail" => Ok(DocumentStatus::Fail),
            _ => Err(UnknownStatus(value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct DocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub role: String,
    pub content: String,
    #[sqlx(try_from = "String")]
    pub status: DocumentStatus,
    pub tags: Vec<String>,
    pub job_post_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
