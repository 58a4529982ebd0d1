use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Book, BookDraft, BookId, BookRepository, StoreError};

/// Process-local store keyed by book id.
///
/// `find_all` happens to yield ascending id order; callers must not rely on
/// it.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: RwLock<BTreeMap<BookId, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given records, keyed by their ids.
    pub fn seeded(records: impl IntoIterator<Item = Book>) -> Self {
        let books = records
            .into_iter()
            .map(|book| (book.book_id, book))
            .collect();

        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookStore {
    async fn find_all(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn save(&self, draft: BookDraft) -> Result<Book, StoreError> {
        let mut books = self.books.write().await;

        let book_id = match draft.book_id {
            Some(id) => id,
            None => books.keys().next_back().map_or(1, |last| last + 1),
        };

        let book = Book {
            book_id,
            name: draft.name,
            summary: draft.summary,
            rating: draft.rating,
        };
        books.insert(book_id, book.clone());

        Ok(book)
    }

    async fn delete_by_id(&self, id: BookId) -> Result<(), StoreError> {
        self.books.write().await.remove(&id);
        Ok(())
    }
}
