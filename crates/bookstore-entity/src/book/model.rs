//! Book entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book published by an author.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    /// Unique book identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    /// The publishing author's user ID.
    pub author_id: i64,
    /// When the book was created.
    pub created_at: DateTime<Utc>,
    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    /// The publishing author's user ID.
    pub author_id: i64,
}

/// Data for updating a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBook {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price.
    pub price: Option<i64>,
}
