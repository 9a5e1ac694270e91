use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        character::CharacterDto,
    },
    server::{
        controller::extract::IdPath, error::AppError, model::character::Character,
        service::character::CharacterService, state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "people";

/// List all characters.
///
/// # Returns
/// - `200 OK` - Characters ordered by id, each with its favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = ResultDto<Vec<CharacterDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db)
        .get_all_characters()
        .await?;

    let characters: Vec<CharacterDto> = characters.into_iter().map(Character::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto::new(
            "Here you go all the people currently in the database",
            characters,
        )),
    ))
}

/// Get a character by id.
///
/// # Returns
/// - `200 OK` - The character with its favorites
/// - `404 Not Found` - No character with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The requested character", body = ResultDto<CharacterDto>),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db)
        .get_character(character_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ResultDto::new("Here you go the person", character.into_dto())),
    ))
}
