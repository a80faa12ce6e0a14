//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repository port and its adapters (SQL, in-memory)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{MemoryRepository, Repository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockRepository;
