//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during startup and cloned for each request through Axum's state
/// extraction. `DatabaseConnection` is a pool, so clones share connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Fallback current user for requests whose session carries none.
    pub default_user_id: Option<i32>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `default_user_id` - Configured fallback user, if any
    pub fn new(db: DatabaseConnection, default_user_id: Option<i32>) -> Self {
        Self {
            db,
            default_user_id,
        }
    }
}
