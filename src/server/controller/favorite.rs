//! Favorite endpoints for the current user.
//!
//! Every handler resolves the current user through `AuthGuard` first and passes the
//! resulting id to `FavoriteService`; the user is never read from the request body.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ResultDto},
        favorite::FavoriteDto,
    },
    server::{
        controller::extract::IdPath, error::AppError, middleware::auth::AuthGuard,
        model::favorite::Favorite, service::favorite::FavoriteService, state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List the current user's favorites.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session used to resolve the current user
///
/// # Returns
/// - `200 OK` - Favorites ordered by id, empty if the user has none
/// - `401 Unauthorized` - No current user could be resolved
/// - `404 Not Found` - Current user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorites of the current user", body = ResultDto<Vec<FavoriteDto>>),
        (status = 401, description = "No current user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session, state.default_user_id)
        .require()
        .await?;

    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user_id)
        .await?;

    let favorites: Vec<FavoriteDto> = favorites.into_iter().map(Favorite::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto::new(
            "Here are the favorites for the current user",
            favorites,
        )),
    ))
}

/// Add a planet to the current user's favorites.
///
/// # Returns
/// - `201 Created` - Favorite created
/// - `401 Unauthorized` - No current user could be resolved
/// - `404 Not Found` - Planet or current user does not exist
/// - `409 Conflict` - Planet already favorited
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Favorite planet added", body = MessageDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "No current user", body = ErrorDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 409, description = "Planet already favorited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    session: Session,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session, state.default_user_id)
        .require()
        .await?;

    FavoriteService::new(&state.db)
        .add_planet_favorite(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Favorite planet added successfully")),
    ))
}

/// Remove a planet from the current user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite deleted
/// - `401 Unauthorized` - No current user could be resolved
/// - `404 Not Found` - Planet not favorited or current user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite planet deleted", body = MessageDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "No current user", body = ErrorDto),
        (status = 404, description = "Favorite or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_planet_favorite(
    State(state): State<AppState>,
    session: Session,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session, state.default_user_id)
        .require()
        .await?;

    FavoriteService::new(&state.db)
        .remove_planet_favorite(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite planet deleted successfully")),
    ))
}

/// Add a character to the current user's favorites.
///
/// # Returns
/// - `201 Created` - Favorite created
/// - `401 Unauthorized` - No current user could be resolved
/// - `404 Not Found` - Character or current user does not exist
/// - `409 Conflict` - Character already favorited
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/people/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Favorite character added", body = MessageDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "No current user", body = ErrorDto),
        (status = 404, description = "Character or user not found", body = ErrorDto),
        (status = 409, description = "Character already favorited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_character_favorite(
    State(state): State<AppState>,
    session: Session,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session, state.default_user_id)
        .require()
        .await?;

    FavoriteService::new(&state.db)
        .add_character_favorite(user_id, character_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Favorite people added successfully")),
    ))
}

/// Remove a character from the current user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite deleted
/// - `401 Unauthorized` - No current user could be resolved
/// - `404 Not Found` - Character not favorited or current user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/people/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite character deleted", body = MessageDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "No current user", body = ErrorDto),
        (status = 404, description = "Favorite or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_character_favorite(
    State(state): State<AppState>,
    session: Session,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session, state.default_user_id)
        .require()
        .await?;

    FavoriteService::new(&state.db)
        .remove_character_favorite(user_id, character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite person deleted successfully")),
    ))
}
