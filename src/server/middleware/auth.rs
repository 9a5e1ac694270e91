//! Current-user resolution for favorite endpoints.
//!
//! Favorites are always scoped to one user, so every favorite handler starts by asking
//! the `AuthGuard` who that user is.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Resolves the current user for a request.
///
/// The user id comes from the session when present, otherwise from the configured
/// default user. Either way the id must belong to an existing user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    default_user_id: Option<i32>,
}

impl<'a> AuthGuard<'a> {
    /// Creates a new AuthGuard.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `session` - Session of the current request
    /// - `default_user_id` - Fallback user when the session carries none
    pub fn new(
        db: &'a DatabaseConnection,
        session: &'a Session,
        default_user_id: Option<i32>,
    ) -> Self {
        Self {
            db,
            session,
            default_user_id,
        }
    }

    /// Returns the id of the current user.
    ///
    /// If the resolved user no longer exists the session is cleared so the stale id is
    /// not offered again.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of an existing user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No session user and no default user
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Resolved id has no user row
    /// - `Err(AppError::SessionErr)` / `Err(AppError::DbErr)` - Store failures
    pub async fn require(&self) -> Result<i32, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await?.or(self.default_user_id) else {
            return Err(AuthError::UserNotInSession.into());
        };

        if !UserRepository::new(self.db).exists(user_id).await? {
            tracing::debug!("Clearing session for missing user {}", user_id);
            auth_session.clear().await;

            return Err(AuthError::UserNotInDatabase(user_id).into());
        }

        Ok(user_id)
    }
}
