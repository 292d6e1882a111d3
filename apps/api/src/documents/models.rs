use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

use crate::errors::AppError;
use crate::models::document::DocumentStatus;

/// Upper bound on tags per document and per tag-search query.
pub const MAX_TAGS: usize = 64;

/// Fields accepted when creating a document.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDocument {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "jobPostUrl")]
    pub job_post_url: Option<String>,
}

/// Partial update. `None` leaves the stored field untouched.
///
/// `job_post_url` distinguishes an absent key (`None`) from an explicit
/// `null` (`Some(None)`), which clears the reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub status: Option<DocumentStatus>,
    pub tags: Option<Vec<String>>,
    #[serde(default, alias = "jobPostUrl", deserialize_with = "present_or_null")]
    pub job_post_url: Option<Option<String>>,
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl NewDocument {
    /// Validates the input and normalizes its tag set.
    pub fn normalized(mut self) -> Result<Self, AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        self.tags = checked_tags(self.tags)?;
        Ok(self)
    }
}

impl DocumentPatch {
    pub fn normalized(mut self) -> Result<Self, AppError> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        self.tags = self.tags.map(checked_tags).transpose()?;
        Ok(self)
    }
}

fn checked_tags(tags: Vec<String>) -> Result<Vec<String>, AppError> {
    let tags = normalize_tags(tags);
    if tags.len() > MAX_TAGS {
        return Err(AppError::Validation(format!(
            "a document can carry at most {MAX_TAGS} tags, got {}",
            tags.len()
        )));
    }
    Ok(tags)
}

/// Trims each tag, drops blanks and removes duplicates, keeping first-seen order.
pub fn normalize_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || seen.contains(tag) {
            continue;
        }
        seen.insert(tag.to_string());
        out.push(tag.to_string());
    }
    out
}
