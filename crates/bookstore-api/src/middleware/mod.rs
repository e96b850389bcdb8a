//! Axum middleware stack.

pub mod auth;
pub mod author;
pub mod cors;
pub mod logging;
