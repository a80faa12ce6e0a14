//! Base entity abstraction.
//!
//! An entity is a domain record distinguished by identifier. The
//! identifier is absent until the repository persists the record and
//! is assigned exactly once, by the repository, at creation time.
//! The service layer never assigns or mutates identity.

/// Identifier assigned to persisted entities.
pub type EntityId = i64;

/// Capability set shared by all persistable domain records.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The assigned identifier, or `None` for a transient instance
    /// that has not been persisted yet.
    fn id(&self) -> Option<EntityId>;

    /// Return a copy of this entity with the identifier set.
    ///
    /// Consumes `self` so that identity assignment produces a new
    /// value instead of mutating the caller's instance.
    fn with_id(self, id: EntityId) -> Self;
}
