//! Domain layer - Core business entities
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! The domain layer has NO external dependencies (except error types).

pub mod entity;
pub mod user;

pub use entity::{Entity, EntityId};
pub use user::{User, UserResponse};
