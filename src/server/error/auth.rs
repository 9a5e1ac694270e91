use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session and no fallback user configured.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session and no default user configured")]
    UserNotInSession,

    /// The resolved user id does not exist in the database.
    ///
    /// Happens when a session outlives its user or `DEFAULT_USER_ID` points at a
    /// missing row. Results in a 404 Not Found response.
    #[error("User {0} could not be found in the database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - No user could be resolved
/// - 404 Not Found - Resolved user does not exist
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
