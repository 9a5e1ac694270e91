//! Read-only endpoints for star systems, factions and species.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        faction::FactionDto,
        species::SpeciesDto,
        star_system::StarSystemDto,
    },
    server::{
        controller::extract::IdPath,
        error::AppError,
        model::{faction::Faction, species::Species, star_system::StarSystem},
        service::universe::UniverseService,
        state::AppState,
    },
};

/// Tag for grouping universe endpoints in OpenAPI documentation
pub static UNIVERSE_TAG: &str = "universe";

/// List all star systems.
#[utoipa::path(
    get,
    path = "/star-systems",
    tag = UNIVERSE_TAG,
    responses(
        (status = 200, description = "All star systems", body = ResultDto<Vec<StarSystemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_star_systems(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let systems = UniverseService::new(&state.db)
        .get_all_star_systems()
        .await?;

    let systems: Vec<StarSystemDto> = systems.into_iter().map(StarSystem::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto::new(
            "Here you go all the star systems currently in the database",
            systems,
        )),
    ))
}

/// Get a star system by id.
#[utoipa::path(
    get,
    path = "/star-systems/{star_system_id}",
    tag = UNIVERSE_TAG,
    params(
        ("star_system_id" = i32, Path, description = "Star system ID")
    ),
    responses(
        (status = 200, description = "The requested star system", body = ResultDto<StarSystemDto>),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Star system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_star_system(
    State(state): State<AppState>,
    IdPath(star_system_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let system = UniverseService::new(&state.db)
        .get_star_system(star_system_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Star system not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ResultDto::new("Here you go the star system", system.into_dto())),
    ))
}

/// List all factions.
#[utoipa::path(
    get,
    path = "/factions",
    tag = UNIVERSE_TAG,
    responses(
        (status = 200, description = "All factions", body = ResultDto<Vec<FactionDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_factions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let factions = UniverseService::new(&state.db).get_all_factions().await?;

    let factions: Vec<FactionDto> = factions.into_iter().map(Faction::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto::new(
            "Here you go all the factions currently in the database",
            factions,
        )),
    ))
}

/// Get a faction by id.
#[utoipa::path(
    get,
    path = "/factions/{faction_id}",
    tag = UNIVERSE_TAG,
    params(
        ("faction_id" = i32, Path, description = "Faction ID")
    ),
    responses(
        (status = 200, description = "The requested faction", body = ResultDto<FactionDto>),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Faction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faction(
    State(state): State<AppState>,
    IdPath(faction_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let faction = UniverseService::new(&state.db)
        .get_faction(faction_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Faction not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ResultDto::new("Here you go the faction", faction.into_dto())),
    ))
}

/// List all species.
#[utoipa::path(
    get,
    path = "/species",
    tag = UNIVERSE_TAG,
    responses(
        (status = 200, description = "All species", body = ResultDto<Vec<SpeciesDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_species(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let species = UniverseService::new(&state.db).get_all_species().await?;

    let species: Vec<SpeciesDto> = species.into_iter().map(Species::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto::new(
            "Here you go all the species currently in the database",
            species,
        )),
    ))
}

/// Get a species by id.
#[utoipa::path(
    get,
    path = "/species/{species_id}",
    tag = UNIVERSE_TAG,
    params(
        ("species_id" = i32, Path, description = "Species ID")
    ),
    responses(
        (status = 200, description = "The requested species", body = ResultDto<SpeciesDto>),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    IdPath(species_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let species = UniverseService::new(&state.db)
        .get_species(species_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Species not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ResultDto::new("Here you go the species", species.into_dto())),
    ))
}
