use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::document::DocumentRow;

/// A document projected for the writing sidebar. Derived per query, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedDocument {
    pub id: Uuid,
    pub company_name: String,
    pub original_content: String,
    pub subtitle: String,
    /// Filled by an external reasoning step; empty when unavailable.
    pub ai_advice: String,
    /// 0.0 unless an external ranking step computed it.
    pub similarity_score: f64,
    pub tags: Vec<String>,
}

impl From<DocumentRow> for RecommendedDocument {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            company_name: row.company,
            original_content: row.content,
            subtitle: row.role,
            ai_advice: String::new(),
            similarity_score: 0.0,
            tags: row.tags,
        }
    }
}
