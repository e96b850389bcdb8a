//! # bookstore-entity
//!
//! Domain entity models. Every struct in this crate represents a database
//! table row or the data needed to create or change one. Row types derive
//! `sqlx::FromRow`.

pub mod book;
pub mod user;
