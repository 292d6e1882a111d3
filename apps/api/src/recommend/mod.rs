// Recommendations: surfaces past documents relevant to the field being written.
// Tag search is best-effort and never fails the caller.

pub mod handlers;
pub mod models;
pub mod tag_search;
