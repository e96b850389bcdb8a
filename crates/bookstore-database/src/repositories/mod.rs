//! PostgreSQL repository implementations of the store contracts.

pub mod book;
pub mod read_list;
pub mod user;

pub use book::BookRepository;
pub use read_list::ReadListRepository;
pub use user::UserRepository;
