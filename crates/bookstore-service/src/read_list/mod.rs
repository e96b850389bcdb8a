//! Per-user reading lists.

pub mod service;

pub use service::ReadListService;
