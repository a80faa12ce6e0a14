//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::domain::User;
use crate::infra::{Database, MemoryRepository, UserStore};
use crate::services::UserService;

/// Application state containing the wired services.
#[derive(Clone)]
pub struct AppState {
    /// User CRUD service
    pub user_service: Arc<UserService>,
    /// Database handle, kept for health checks; absent when the state
    /// was built over the in-memory adapter
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state backed by the SQL adapter.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserService::new(store));

        Self {
            user_service,
            database: Some(database),
        }
    }

    /// Create application state backed by the in-memory adapter.
    ///
    /// Useful for tests and for running the API without a database.
    pub fn in_memory() -> Self {
        let repo = Arc::new(MemoryRepository::<User>::new());
        let user_service = Arc::new(UserService::new(repo));

        Self {
            user_service,
            database: None,
        }
    }
}
