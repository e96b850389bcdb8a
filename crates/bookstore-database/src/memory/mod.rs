//! In-memory store implementations.
//!
//! Used by tests and by local runs that do not need PostgreSQL. Identifiers
//! are assigned from a monotonically increasing counter starting at 1.

pub mod book;
pub mod read_list;
pub mod user;

pub use book::MemoryBookStore;
pub use read_list::MemoryReadListStore;
pub use user::MemoryUserStore;
