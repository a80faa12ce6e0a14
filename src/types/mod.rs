//! Shared types for consistent HTTP responses.

mod response;

pub use response::{Created, NoContent};
