// Document management: owner-scoped CRUD over the `documents` table.
// All storage access goes through the `DocumentStore` trait held in `AppState`.

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod models;
pub mod store;
