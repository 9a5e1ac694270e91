use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::favorite::FavoriteTarget};

#[derive(Error, Debug, PartialEq)]
pub enum FavoriteError {
    /// The planet to favorite does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Planet {0} not found")]
    PlanetNotFound(i32),

    /// The character to favorite does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Character {0} not found")]
    CharacterNotFound(i32),

    /// The user already has a favorite for this target.
    ///
    /// Raised both by the pre-insert lookup and when the storage unique index
    /// rejects a concurrent insert. Results in a 409 Conflict response.
    #[error("User {user_id} has already favorited {target}")]
    AlreadyExists {
        /// Owner of the existing favorite
        user_id: i32,
        /// Target that is already favorited
        target: FavoriteTarget,
    },

    /// The user has no favorite for this target.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {user_id} has not favorited {target}")]
    NotFound {
        /// User whose favorite was requested
        user_id: i32,
        /// Target that is not favorited
        target: FavoriteTarget,
    },
}

/// Converts favorite errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Target or favorite does not exist
/// - 409 Conflict - Favorite already exists
impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            Self::PlanetNotFound(_) => (StatusCode::NOT_FOUND, "Planet not found".to_string()),
            Self::CharacterNotFound(_) => {
                (StatusCode::NOT_FOUND, "Person not found".to_string())
            }
            Self::AlreadyExists { target, .. } => (
                StatusCode::CONFLICT,
                format!(
                    "Favorite {} already exists for the current user",
                    target.label()
                ),
            ),
            Self::NotFound { target, .. } => (
                StatusCode::NOT_FOUND,
                format!("Favorite {} not found for the current user", target.label()),
            ),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
