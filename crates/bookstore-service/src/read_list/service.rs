//! Reading list operations for the authenticated caller.

use std::sync::Arc;

use tracing::info;

use bookstore_auth::CallerIdentity;
use bookstore_core::error::AppError;
use bookstore_core::result::AppResult;
use bookstore_database::store::{BookStore, ReadListStore, UserStore};
use bookstore_entity::book::Book;

/// Manages the caller's own reading list. There is no way to read or
/// change another user's list.
#[derive(Debug, Clone)]
pub struct ReadListService {
    read_lists: Arc<dyn ReadListStore>,
    books: Arc<dyn BookStore>,
    users: Arc<dyn UserStore>,
}

impl ReadListService {
    /// Create a new reading list service.
    pub fn new(
        read_lists: Arc<dyn ReadListStore>,
        books: Arc<dyn BookStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            read_lists,
            books,
            users,
        }
    }

    /// Books on the caller's list, oldest addition first.
    pub async fn list(&self, caller: &CallerIdentity) -> AppResult<Vec<Book>> {
        self.ensure_caller_exists(caller).await?;
        self.read_lists.list(caller.user_id).await
    }

    /// Add a catalogue book to the caller's list.
    ///
    /// Unknown books are `NotFound`; a book already on the list is `Conflict`.
    pub async fn add(&self, caller: &CallerIdentity, book_id: i64) -> AppResult<Book> {
        self.ensure_caller_exists(caller).await?;
        let book = self
            .books
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Book {book_id} not found")))?;

        if !self.read_lists.add(caller.user_id, book_id).await? {
            return Err(AppError::conflict(format!(
                "Book {book_id} is already on the reading list"
            )));
        }

        info!(user_id = caller.user_id, book_id, "Book added to reading list");
        Ok(book)
    }

    /// Remove a book from the caller's list. `NotFound` if it was not there.
    pub async fn remove(&self, caller: &CallerIdentity, book_id: i64) -> AppResult<()> {
        self.ensure_caller_exists(caller).await?;
        if !self.read_lists.remove(caller.user_id, book_id).await? {
            return Err(AppError::not_found(format!(
                "Book {book_id} is not on the reading list"
            )));
        }

        info!(user_id = caller.user_id, book_id, "Book removed from reading list");
        Ok(())
    }

    async fn ensure_caller_exists(&self, caller: &CallerIdentity) -> AppResult<()> {
        match self.users.find_by_id(caller.user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("User not found")),
        }
    }
}
