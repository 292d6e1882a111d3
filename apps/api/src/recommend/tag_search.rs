//! Tag search — finds past documents sharing at least one tag with the query.
//!
//! Overlap, not subset: a document matches when its tag set intersects the
//! query set. Results are newest first, capped at `TAG_SEARCH_LIMIT`, and
//! carry no advice or score. Storage failures degrade to an empty result,
//! as does a query carrying more than `MAX_TAGS` tags.

use tracing::{debug, warn};

use crate::documents::models::{normalize_tags, MAX_TAGS};
use crate::documents::store::DocumentStore;
use crate::recommend::models::RecommendedDocument;

pub const TAG_SEARCH_LIMIT: usize = 10;

pub async fn search_documents_by_tags(
    store: &dyn DocumentStore,
    tags: &[String],
) -> Vec<RecommendedDocument> {
    if tags.len() > MAX_TAGS {
        warn!("Tag search with {} tags exceeds the limit of {MAX_TAGS}", tags.len());
        return Vec::new();
    }

    let query = normalize_tags(tags.iter().cloned());
    if query.is_empty() {
        return Vec::new();
    }

    match store.find_overlapping_tags(&query, TAG_SEARCH_LIMIT).await {
        Ok(rows) => {
            debug!("Tag search {query:?} matched {} documents", rows.len());
            rows.into_iter()
                .take(TAG_SEARCH_LIMIT)
                .map(RecommendedDocument::from)
                .collect()
        }
        Err(e) => {
            warn!("Tag search {query:?} failed, returning no recommendations: {e}");
            Vec::new()
        }
    }
}
