//! Request extractors shared by the handlers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::AppError;

/// Integer id taken from the single path parameter of a route.
///
/// A segment that does not parse as an `i32` is rejected with `AppError::BadRequest`,
/// so clients receive the `{"error": ..}` body instead of axum's plain-text rejection.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}
