//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs` with the generated document at
//! `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Starwoven Datacore", description = "Starwoven universe catalog API"),
    tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::character::CHARACTER_TAG, description = "Character dossiers and administration"),
        (name = controller::ship::SHIP_TAG, description = "Ships of the Starwoven universe"),
        (name = controller::faction::FACTION_TAG, description = "Factions and their fleets"),
        (name = controller::episode::EPISODE_TAG, description = "Episodes and their cast"),
        (name = controller::location::LOCATION_TAG, description = "Worlds, stations and regions"),
        (name = controller::technology::TECHNOLOGY_TAG, description = "Technology entries"),
        (name = controller::lore::LORE_TAG, description = "Lore entries"),
    )
)]
struct ApiDoc;

/// Builds the API router with every endpoint and the Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /health` - Liveness check
/// - `GET /api/{kind}` - List projection for each of the seven kinds
/// - `GET /api/{kind}/slug/{slug}` - Detail projection by slug
/// - `GET|PUT|DELETE /api/characters/{id}` - Character by numeric id
/// - `POST /api/characters` - Create a character
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged with the page routes.
pub fn routes() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(
            controller::character::list_characters,
            controller::character::create_character
        ))
        .routes(routes!(controller::character::get_character_by_slug))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(controller::ship::list_ships))
        .routes(routes!(controller::ship::get_ship_by_slug))
        .routes(routes!(controller::faction::list_factions))
        .routes(routes!(controller::faction::get_faction_by_slug))
        .routes(routes!(controller::episode::list_episodes))
        .routes(routes!(controller::episode::get_episode_by_slug))
        .routes(routes!(controller::location::list_locations))
        .routes(routes!(controller::location::get_location_by_slug))
        .routes(routes!(controller::technology::list_technology))
        .routes(routes!(controller::technology::get_technology_by_slug))
        .routes(routes!(controller::lore::list_lore))
        .routes(routes!(controller::lore::get_lore_by_slug))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
