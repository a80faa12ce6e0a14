//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::{Entity, EntityId};
use crate::errors::AppError;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the repository at creation time; `None` until persisted
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    /// Maintained by the persistence adapter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a transient user that has not been persisted yet
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Whether this instance has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Entity for User {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// User response (shape returned to API clients)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: EntityId,
    /// User display name
    #[schema(example = "Juan")]
    pub name: String,
    /// User email address
    #[schema(example = "juan@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

/// Only persisted entities can be rendered to clients; a transient
/// entity reaching this conversion indicates an adapter bug and is
/// surfaced as an error instead of leaking a placeholder id.
impl TryFrom<User> for UserResponse {
    type Error = AppError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        let id = user
            .id
            .ok_or_else(|| AppError::internal("entity has no assigned id"))?;

        Ok(Self {
            id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        })
    }
}
