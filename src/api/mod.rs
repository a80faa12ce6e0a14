//! API layer - HTTP adapter
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Custom extractors
//! - Route definitions
//!
//! The HTTP surface is illustrative integration guidance; the reusable
//! core is the domain/port/service stack underneath it.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
