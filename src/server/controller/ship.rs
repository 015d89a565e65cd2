use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::CatalogKind,
        ship::{ShipDto, ShipSummaryDto},
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::ship::ShipService,
    },
};

pub static SHIP_TAG: &str = "ships";

/// List all ships ordered by name
#[utoipa::path(
    get,
    path = "/api/ships",
    tag = SHIP_TAG,
    responses(
        (status = 200, description = "All ships", body = Vec<ShipSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let ship_list = ship_service.list().await?;

    Ok((StatusCode::OK, Json(ship_list)))
}

/// Get a ship with its primary crew, operating factions and tags
#[utoipa::path(
    get,
    path = "/api/ships/slug/{slug}",
    tag = SHIP_TAG,
    params(("slug" = String, Path, description = "Ship slug")),
    responses(
        (status = 200, description = "Ship found", body = ShipDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ship_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ship_service = ShipService::new(&state.db);

    let ship = ship_service
        .get_by_slug(&slug)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Ship))?;

    Ok((StatusCode::OK, Json(ship)))
}
