//! Store contracts for users, books, and reading lists.
//!
//! The auth gates and the service layer depend on these traits only, so
//! the PostgreSQL repositories and the in-memory stores are interchangeable.

use async_trait::async_trait;

use bookstore_core::result::AppResult;
use bookstore_entity::book::{Book, CreateBook, UpdateBook};
use bookstore_entity::user::{CreateUser, UpdateUser, User};

/// Persistent user records.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List every user, oldest first.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// List users whose author flag is set.
    async fn list_authors(&self) -> AppResult<Vec<User>>;

    /// Insert a user. Fails with a conflict error if the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Apply a profile update. Returns `None` if the user does not exist.
    async fn update_profile(&self, id: i64, data: &UpdateUser) -> AppResult<Option<User>>;

    /// Set the author flag. Returns `false` if the user does not exist.
    async fn set_author(&self, id: i64, is_author: bool) -> AppResult<bool>;

    /// Delete a user. Returns `false` if the user does not exist.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Persistent book records.
#[async_trait]
pub trait BookStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a book by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// List every book, oldest first.
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// List the books published by one author.
    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>>;

    /// Insert a book.
    async fn create(&self, data: &CreateBook) -> AppResult<Book>;

    /// Apply an update. Returns `None` if the book does not exist.
    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Option<Book>>;

    /// Delete a book. Returns `false` if the book does not exist.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Per-user reading lists of catalogue books.
#[async_trait]
pub trait ReadListStore: Send + Sync + std::fmt::Debug + 'static {
    /// Put a book on a user's list. Returns `false` if it was already there.
    async fn add(&self, user_id: i64, book_id: i64) -> AppResult<bool>;

    /// Take a book off a user's list. Returns `false` if it was not there.
    async fn remove(&self, user_id: i64, book_id: i64) -> AppResult<bool>;

    /// Books on a user's list in the order they were added. Books deleted
    /// from the catalogue drop out.
    async fn list(&self, user_id: i64) -> AppResult<Vec<Book>>;
}
