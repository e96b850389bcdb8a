//! In-memory reading list store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookstore_core::result::AppResult;
use bookstore_entity::book::Book;

use crate::store::{BookStore, ReadListStore};

/// Reading lists keyed by user ID, resolving books through a shared
/// [`BookStore`] so deleted books drop out like the cascading table does.
#[derive(Debug)]
pub struct MemoryReadListStore {
    books: Arc<dyn BookStore>,
    lists: RwLock<BTreeMap<i64, Vec<i64>>>,
}

impl MemoryReadListStore {
    /// Create empty reading lists over `books`.
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self {
            books,
            lists: RwLock::default(),
        }
    }
}

#[async_trait]
impl ReadListStore for MemoryReadListStore {
    async fn add(&self, user_id: i64, book_id: i64) -> AppResult<bool> {
        let mut lists = self.lists.write().await;
        let list = lists.entry(user_id).or_default();
        if list.contains(&book_id) {
            return Ok(false);
        }
        list.push(book_id);
        Ok(true)
    }

    async fn remove(&self, user_id: i64, book_id: i64) -> AppResult<bool> {
        let mut lists = self.lists.write().await;
        let Some(list) = lists.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|id| *id != book_id);
        Ok(list.len() < before)
    }

    async fn list(&self, user_id: i64) -> AppResult<Vec<Book>> {
        let ids = self
            .lists
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default();

        let mut books = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(book) = self.books.find_by_id(id).await? {
                books.push(book);
            }
        }
        Ok(books)
    }
}
