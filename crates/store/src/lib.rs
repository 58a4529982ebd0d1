//! Storage layer for book records: the repository contract plus the
//! in-memory store used by the running service and by tests.

mod memory;

pub use memory::InMemoryBookStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// A stored book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: BookId,
    pub name: String,
    pub summary: String,
    pub rating: i32,
}

/// Payload for a save: the record's data fields with an optional identity.
///
/// A draft without an id asks the store to assign one; a draft with an id is
/// inserted or replaced at that identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<BookId>,
    pub name: String,
    pub summary: String,
    pub rating: i32,
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            book_id: Some(book.book_id),
            name: book.name,
            summary: book.summary,
            rating: book.rating,
        }
    }
}

/// Failures surfaced by a repository backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Persistence contract for book records.
///
/// Identity uniqueness and save semantics (assign vs. accept a supplied id)
/// belong to the implementation; callers treat `save` as insert-or-replace.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every stored record, in the backend's natural order.
    async fn find_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Look up a record by identity.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, StoreError>;

    /// Persist a draft and return the stored record.
    async fn save(&self, draft: BookDraft) -> Result<Book, StoreError>;

    /// Remove a record by identity. Removing an absent id is not an error.
    async fn delete_by_id(&self, id: BookId) -> Result<(), StoreError>;
}
