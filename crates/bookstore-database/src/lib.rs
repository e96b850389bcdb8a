//! # bookstore-database
//!
//! PostgreSQL connection management, the user/book/reading-list store
//! contracts consumed by the auth and service layers, and their
//! implementations: sqlx repositories for production and in-memory stores
//! for tests and local runs.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{BookStore, ReadListStore, UserStore};
