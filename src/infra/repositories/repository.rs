//! Repository port - the abstract capability set for entity persistence.

use async_trait::async_trait;

use crate::domain::{Entity, EntityId};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Generic CRUD repository port.
///
/// Any persistence technology (relational, document, in-memory) may
/// implement this trait; the service layer dispatches polymorphically
/// to whichever adapter was injected.
///
/// Contract notes:
/// - "no match" on reads and deletes is a return value, not an error
/// - `create` ignores any caller-supplied id; the adapter assigns it
/// - `update` uses the `id` argument; the id inside the entity body is
///   ignored
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Fetch an entity by id; `Ok(None)` when no record matches
    async fn get_by_id(&self, id: EntityId) -> AppResult<Option<E>>;

    /// Fetch all entities; order is adapter-defined
    async fn get_all(&self) -> AppResult<Vec<E>>;

    /// Persist a new entity and return it with the assigned id
    async fn create(&self, entity: E) -> AppResult<E>;

    /// Replace the stored mutable fields for the record at `id`.
    ///
    /// Fails with `AppError::NotFound` when no such record exists;
    /// never silently upserts.
    async fn update(&self, id: EntityId, entity: E) -> AppResult<E>;

    /// Remove the record at `id`; `true` if a record existed and was
    /// removed, `false` if nothing matched
    async fn delete(&self, id: EntityId) -> AppResult<bool>;
}
