//! User registration, login, and profile management.

pub mod service;

pub use service::{LoginResult, RegisterUser, UserService};
