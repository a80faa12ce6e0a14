//! Generic CRUD service - the use-case layer.

use std::sync::Arc;

use crate::domain::{Entity, EntityId, User};
use crate::errors::AppResult;
use crate::infra::Repository;

/// Generic CRUD use case over a single entity type.
///
/// Holds one repository reference, fixed at construction and never
/// reassigned. Each public method forwards to the matching port
/// operation unchanged: no retry, no validation, no transformation.
pub struct CrudService<E: Entity> {
    repository: Arc<dyn Repository<E>>,
}

impl<E: Entity> CrudService<E> {
    /// Create a service backed by the given repository adapter
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self { repository }
    }

    /// Fetch a single entity; `Ok(None)` when no record matches
    pub async fn get(&self, id: EntityId) -> AppResult<Option<E>> {
        self.repository.get_by_id(id).await
    }

    /// Fetch all entities; order is adapter-defined
    pub async fn list_all(&self) -> AppResult<Vec<E>> {
        self.repository.get_all().await
    }

    /// Persist a new entity; the repository assigns the id
    pub async fn create(&self, entity: E) -> AppResult<E> {
        self.repository.create(entity).await
    }

    /// Replace the stored fields for the record at `id`
    pub async fn update(&self, id: EntityId, entity: E) -> AppResult<E> {
        self.repository.update(id, entity).await
    }

    /// Remove the record at `id`; `true` if a record was removed
    pub async fn delete(&self, id: EntityId) -> AppResult<bool> {
        self.repository.delete(id).await
    }
}

/// Concrete CRUD service for the `User` entity
pub type UserService = CrudService<User>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockRepository;
    use mockall::predicate::eq;

    fn persisted_user(id: EntityId) -> User {
        User::new("Test User", "test@example.com").with_id(id)
    }

    fn service_with(repo: MockRepository<User>) -> UserService {
        CrudService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn get_forwards_to_repository() {
        let mut repo = MockRepository::<User>::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(persisted_user(id))));

        let result = service_with(repo).get(1).await.unwrap();
        assert_eq!(result.unwrap().id, Some(1));
    }

    #[tokio::test]
    async fn get_passes_absent_result_through() {
        let mut repo = MockRepository::<User>::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let result = service_with(repo).get(42).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_all_forwards_to_repository() {
        let mut repo = MockRepository::<User>::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![persisted_user(1), persisted_user(2)]));

        let users = service_with(repo).list_all().await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn create_returns_repository_assigned_id() {
        let mut repo = MockRepository::<User>::new();
        repo.expect_create()
            .returning(|entity| Ok(entity.with_id(1)));

        let created = service_with(repo)
            .create(User::new("Test User", "test@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn update_propagates_not_found() {
        let mut repo = MockRepository::<User>::new();
        repo.expect_update()
            .returning(|_, _| Err(AppError::NotFound));

        let result = service_with(repo)
            .update(42, User::new("x", "x@example.com"))
            .await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_passes_boolean_through() {
        let mut repo = MockRepository::<User>::new();
        repo.expect_delete().with(eq(1)).returning(|_| Ok(true));
        repo.expect_delete().with(eq(2)).returning(|_| Ok(false));

        let service = service_with(repo);
        assert!(service.delete(1).await.unwrap());
        assert!(!service.delete(2).await.unwrap());
    }
}
