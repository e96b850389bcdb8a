//! Reading list repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use bookstore_core::error::{AppError, ErrorKind};
use bookstore_core::result::AppResult;
use bookstore_entity::book::Book;

use crate::store::ReadListStore;

/// Repository over the `read_list` join table.
#[derive(Debug, Clone)]
pub struct ReadListRepository {
    pool: PgPool,
}

impl ReadListRepository {
    /// Create a new reading list repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadListStore for ReadListRepository {
    async fn add(&self, user_id: i64, book_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            r#"INSERT INTO read_list (user_id, book_id)
               VALUES ($1, $2)
               ON CONFLICT (user_id, book_id) DO NOTHING"#,
        )
        .bind(user_id)
        .bind(book_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The book or the user disappeared after the caller checked.
            let missing = e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation());
            if missing {
                AppError::not_found(format!("Book {book_id} not found"))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to add to reading list", e)
            }
        })?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, user_id: i64, book_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM read_list WHERE user_id = $1 AND book_id = $2")
            .bind(user_id)
            .bind(book_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to remove from reading list",
                    e,
                )
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, user_id: i64) -> AppResult<Vec<Book>> {
        sqlx::query_as::<_, Book>(
            r#"SELECT b.*
               FROM read_list r
               JOIN books b ON b.id = r.book_id
               WHERE r.user_id = $1
               ORDER BY r.added_at, b.id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reading list", e))
    }
}
