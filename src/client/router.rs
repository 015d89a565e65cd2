use axum::{routing::get, Router};

use crate::{
    client::routes::{
        character, episode, faction, home, location, lore, not_found, search, ship, technology,
    },
    server::model::app::AppState,
};

/// Routes for the server-rendered wiki pages
///
/// Any path not matched here or by the API renders the not found page with HTTP 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home_page))
        .route("/search", get(search::search_page))
        .route("/characters", get(character::characters_page))
        .route("/characters/{slug}", get(character::character_page))
        .route("/ships", get(ship::ships_page))
        .route("/ships/{slug}", get(ship::ship_page))
        .route("/factions", get(faction::factions_page))
        .route("/factions/{slug}", get(faction::faction_page))
        .route("/episodes", get(episode::episodes_page))
        .route("/episodes/{slug}", get(episode::episode_page))
        .route("/locations", get(location::locations_page))
        .route("/locations/{slug}", get(location::location_page))
        .route("/technology", get(technology::technology_list_page))
        .route("/technology/{slug}", get(technology::technology_page))
        .route("/lore", get(lore::lore_list_page))
        .route("/lore/{slug}", get(lore::lore_page))
        .fallback(not_found::not_found_page)
}
