//! Application services layer - Use cases.
//!
//! Services fulfill application use cases by delegating to the
//! repository port; they depend on the trait, not a concrete adapter.
//!
//! The CRUD service is deliberately a 1:1 pass-through. It is the seam
//! where cross-cutting business rules (validation, authorization,
//! auditing) would be added in a real system; the template leaves it
//! as an identity forward so adopters can extend it.

mod crud_service;

pub use crud_service::{CrudService, UserService};
