use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        user::UserDto,
    },
    server::{
        error::AppError, model::user::User, service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// Returns every user with their favorites. Passwords are never included.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Users ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = ResultDto<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all_users().await?;

    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto::new(
            "Here you go all the users currently in the database",
            users,
        )),
    ))
}
