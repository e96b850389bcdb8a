//! In-memory book store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use bookstore_core::result::AppResult;
use bookstore_entity::book::{Book, CreateBook, UpdateBook};

use crate::store::BookStore;

/// Book store backed by a `BTreeMap` keyed by book ID.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<BTreeMap<i64, Book>>,
    next_id: AtomicI64,
}

impl MemoryBookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        Ok(self
            .books
            .read()
            .await
            .values()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let now = Utc::now();
        let book = Book {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: data.title.clone(),
            description: data.description.clone(),
            price: data.price,
            author_id: data.author_id,
            created_at: now,
            updated_at: now,
        };
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Option<Book>> {
        let mut books = self.books.write().await;
        let Some(book) = books.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = &data.title {
            book.title = title.clone();
        }
        if let Some(description) = &data.description {
            book.description = description.clone();
        }
        if let Some(price) = data.price {
            book.price = price;
        }
        book.updated_at = Utc::now();
        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.books.write().await.remove(&id).is_some())
    }
}
