//! Repository layer - Data access abstraction
//!
//! The `Repository` trait is the port that isolates the use-case layer
//! from persistence technology; `UserStore` (SQL) and `MemoryRepository`
//! are the adapters implementing it.

pub(crate) mod entities;
mod memory;
mod repository;
mod user_store;

pub use memory::MemoryRepository;
pub use repository::Repository;
pub use user_store::UserStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockRepository;
