//! SQL-backed user repository adapter.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use super::repository::Repository;
use crate::domain::{EntityId, User};
use crate::errors::{AppError, AppResult};

/// Relational implementation of the repository port for `User`.
///
/// Translates between the domain entity and the persisted row shape.
/// Storage-layer errors propagate unchanged; this adapter adds no
/// retry or backoff policy.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<User> for UserStore {
    async fn get_by_id(&self, id: EntityId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, entity: User) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            // Input id is ignored; the store assigns the primary key
            id: NotSet,
            name: Set(entity.name),
            email: Set(entity.email),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: EntityId, entity: User) -> AppResult<User> {
        // Fetch first so a missing record is a hard failure, never an upsert
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(entity.name);
        active.email = Set(entity.email);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: EntityId) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
