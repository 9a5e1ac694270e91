use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        planet::PlanetDto,
    },
    server::{
        controller::extract::IdPath, error::AppError, model::planet::Planet,
        service::planet::PlanetService, state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// List all planets.
///
/// # Returns
/// - `200 OK` - Planets ordered by id, each with its favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = ResultDto<Vec<PlanetDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all_planets().await?;

    let planets: Vec<PlanetDto> = planets.into_iter().map(Planet::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto::new(
            "Here you go all the planets currently in the database",
            planets,
        )),
    ))
}

/// Get a planet by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - Primary key of the planet
///
/// # Returns
/// - `200 OK` - The planet with its favorites
/// - `404 Not Found` - No planet with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "The requested planet", body = ResultDto<PlanetDto>),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db)
        .get_planet(planet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ResultDto::new("Here you go the planet", planet.into_dto())),
    ))
}
