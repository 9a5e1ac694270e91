//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here with its OpenAPI specification. Swagger UI serves
//! the collected document at `/api/docs`, and the sitemap at `/` lists the same paths.

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, controller::sitemap::Sitemap, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of API paths
/// - `GET /user` - All users
/// - `GET /characters`, `GET /characters/{character_id}` - Characters
/// - `GET /planets`, `GET /planets/{planet_id}` - Planets
/// - `GET /star-systems`, `GET /factions`, `GET /species` and their `/{id}` variants
/// - `GET /users/favorites` - Favorites of the current user
/// - `POST|DELETE /favorite/planet/{planet_id}` - Add or remove a favorite planet
/// - `POST|DELETE /favorite/people/{character_id}` - Add or remove a favorite character
///
/// # Returns
/// An Axum `Router<AppState>` with permissive CORS, ready for `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron universe API"), tags(
        (name = controller::sitemap::SITEMAP_TAG, description = "API index"),
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::universe::UNIVERSE_TAG, description = "Star system, faction and species API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes for the current user"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::get_sitemap))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::universe::get_star_systems))
        .routes(routes!(controller::universe::get_star_system))
        .routes(routes!(controller::universe::get_factions))
        .routes(routes!(controller::universe::get_faction))
        .routes(routes!(controller::universe::get_all_species))
        .routes(routes!(controller::universe::get_species))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_planet_favorite,
            controller::favorite::remove_planet_favorite
        ))
        .routes(routes!(
            controller::favorite::add_character_favorite,
            controller::favorite::remove_character_favorite
        ))
        .split_for_parts();

    let sitemap = Sitemap::new(api.paths.paths.keys().cloned().collect());

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(Extension(sitemap))
        .layer(CorsLayer::permissive())
}
