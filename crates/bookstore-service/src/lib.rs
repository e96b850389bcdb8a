//! # bookstore-service
//!
//! Business logic layer. Services orchestrate the stores and the auth
//! crate; every operation acting on behalf of a caller takes the
//! [`CallerIdentity`](bookstore_auth::CallerIdentity) resolved by the
//! authentication gate.

pub mod book;
pub mod read_list;
pub mod user;

pub use book::{BookService, NewBook};
pub use read_list::ReadListService;
pub use user::{LoginResult, RegisterUser, UserService};
