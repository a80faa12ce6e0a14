//! Rust CRUD Starter - A layered CRUD API template
//!
//! This crate demonstrates a clean separation between domain logic and
//! persistence for a single-entity CRUD workflow: a repository port, a
//! pass-through use-case layer, a SQL-backed adapter, and an example
//! HTTP API adapter built with Axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases (CRUD service)
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, routes, and state
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Entity, EntityId, User};
pub use errors::{AppError, AppResult};
pub use services::{CrudService, UserService};
