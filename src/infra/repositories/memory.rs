//! In-memory repository adapter.
//!
//! Implements the same port contract as the SQL adapter against a
//! plain map. Used by test harnesses and local experimentation; ids
//! are assigned sequentially starting at 1, mirroring an
//! auto-increment primary key.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::repository::Repository;
use crate::domain::{Entity, EntityId};
use crate::errors::{AppError, AppResult};

struct Store<E> {
    next_id: EntityId,
    records: BTreeMap<EntityId, E>,
}

/// Generic in-memory implementation of the repository port
pub struct MemoryRepository<E: Entity> {
    store: Mutex<Store<E>>,
}

impl<E: Entity> MemoryRepository<E> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    fn locked(&self) -> AppResult<std::sync::MutexGuard<'_, Store<E>>> {
        self.store
            .lock()
            .map_err(|_| AppError::internal("repository lock poisoned"))
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn get_by_id(&self, id: EntityId) -> AppResult<Option<E>> {
        let store = self.locked()?;
        Ok(store.records.get(&id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<E>> {
        let store = self.locked()?;
        // BTreeMap iteration gives ascending id order
        Ok(store.records.values().cloned().collect())
    }

    async fn create(&self, entity: E) -> AppResult<E> {
        let mut store = self.locked()?;
        let id = store.next_id;
        store.next_id += 1;

        // Any caller-supplied id is overwritten
        let entity = entity.with_id(id);
        store.records.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: EntityId, entity: E) -> AppResult<E> {
        let mut store = self.locked()?;
        if !store.records.contains_key(&id) {
            return Err(AppError::NotFound);
        }

        // The argument id is authoritative; the body id is ignored
        let entity = entity.with_id(id);
        store.records.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> AppResult<bool> {
        let mut store = self.locked()?;
        Ok(store.records.remove(&id).is_some())
    }
}
