//! Book catalogue management.

pub mod service;

pub use service::{BookService, NewBook};
