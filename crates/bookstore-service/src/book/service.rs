//! Book catalogue reads and author-owned writes.

use std::sync::Arc;

use tracing::info;

use bookstore_auth::CallerIdentity;
use bookstore_core::error::AppError;
use bookstore_core::result::AppResult;
use bookstore_database::store::{BookStore, UserStore};
use bookstore_entity::book::{Book, CreateBook, UpdateBook};

/// Data for publishing a book. The author is always the caller.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewBook {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: i64,
}

/// Catalogue reads and author-owned book writes.
///
/// Write operations assume the author gate has already admitted the caller;
/// they additionally restrict changes to books the caller published.
#[derive(Debug, Clone)]
pub struct BookService {
    books: Arc<dyn BookStore>,
    users: Arc<dyn UserStore>,
}

impl BookService {
    /// Create a new book service.
    pub fn new(books: Arc<dyn BookStore>, users: Arc<dyn UserStore>) -> Self {
        Self { books, users }
    }

    /// List the whole catalogue.
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.books.list().await
    }

    /// Get a book by ID.
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))
    }

    /// Lists the books of one author. Unknown or non-author users are `NotFound`.
    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        match self.users.find_by_id(author_id).await? {
            Some(user) if user.is_author => self.books.list_by_author(author_id).await,
            _ => Err(AppError::not_found(format!("Author {author_id} not found"))),
        }
    }

    /// Publish a book with the caller as its author.
    pub async fn create_book(&self, caller: &CallerIdentity, data: NewBook) -> AppResult<Book> {
        validate_fields(Some(&data.title), Some(data.price))?;

        let book = self
            .books
            .create(&CreateBook {
                title: data.title,
                description: data.description,
                price: data.price,
                author_id: caller.user_id,
            })
            .await?;

        info!(book_id = book.id, author_id = caller.user_id, "Book published");
        Ok(book)
    }

    /// Apply a partial update to one of the caller's books.
    ///
    /// A book published by someone else is `Forbidden`.
    pub async fn update_book(
        &self,
        caller: &CallerIdentity,
        id: i64,
        update: UpdateBook,
    ) -> AppResult<Book> {
        validate_fields(update.title.as_ref(), update.price)?;
        self.owned_book(caller, id).await?;

        self.books
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))
    }

    /// Delete one of the caller's books.
    pub async fn delete_book(&self, caller: &CallerIdentity, id: i64) -> AppResult<()> {
        self.owned_book(caller, id).await?;

        if !self.books.delete(id).await? {
            return Err(AppError::not_found(format!("Book {id} not found")));
        }

        info!(book_id = id, author_id = caller.user_id, "Book deleted");
        Ok(())
    }

    async fn owned_book(&self, caller: &CallerIdentity, id: i64) -> AppResult<Book> {
        let book = self.get_book(id).await?;
        if book.author_id != caller.user_id {
            tracing::warn!(
                book_id = id,
                user_id = caller.user_id,
                "Caller attempted to modify another author's book"
            );
            return Err(AppError::forbidden("Forbidden"));
        }
        Ok(book)
    }
}

fn validate_fields(title: Option<&String>, price: Option<i64>) -> AppResult<()> {
    if title.is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::validation("Title cannot be empty"));
    }
    if price.is_some_and(|p| p <= 0) {
        return Err(AppError::validation("Price must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::error::ErrorKind;
    use bookstore_database::memory::{MemoryBookStore, MemoryUserStore};
    use bookstore_entity::user::CreateUser;

    async fn setup() -> (BookService, Arc<MemoryUserStore>, CallerIdentity, CallerIdentity) {
        let users = Arc::new(MemoryUserStore::new());
        let mut callers = Vec::new();
        for email in ["one@x.com", "two@x.com"] {
            let user = users
                .create(&CreateUser {
                    name: email.to_string(),
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                })
                .await
                .unwrap();
            users.set_author(user.id, true).await.unwrap();
            callers.push(CallerIdentity {
                user_id: user.id,
                email: user.email,
            });
        }
        let second = callers.pop().unwrap();
        let first = callers.pop().unwrap();
        let service = BookService::new(Arc::new(MemoryBookStore::new()), users.clone());
        (service, users, first, second)
    }

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            description: "A story".to_string(),
            price: 1200,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_caller_as_author() {
        let (service, _, first, _) = setup().await;
        let book = service.create_book(&first, new_book("Dune")).await.unwrap();
        assert_eq!(book.author_id, first.user_id);

        let listed = service.list_by_author(first.user_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(service.get_book(book.id).await.unwrap().title, "Dune");
    }

    #[tokio::test]
    async fn test_create_validates_fields() {
        let (service, _, first, _) = setup().await;
        let err = service.create_book(&first, new_book(" ")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let mut free = new_book("Free");
        free.price = 0;
        let err = service.create_book(&first, free).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_only_owner_may_modify() {
        let (service, _, first, second) = setup().await;
        let book = service.create_book(&first, new_book("Dune")).await.unwrap();

        let update = UpdateBook {
            price: Some(999),
            ..Default::default()
        };
        let err = service
            .update_book(&second, book.id, update.clone())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        let err = service.delete_book(&second, book.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let updated = service.update_book(&first, book.id, update).await.unwrap();
        assert_eq!(updated.price, 999);
        service.delete_book(&first, book.id).await.unwrap();
        assert_eq!(
            service.get_book(book.id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_list_by_non_author_is_not_found() {
        let (service, users, first, _) = setup().await;
        users.set_author(first.user_id, false).await.unwrap();
        assert_eq!(
            service.list_by_author(first.user_id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            service.list_by_author(404).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }
}
