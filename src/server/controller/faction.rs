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
        faction::{FactionDto, FactionSummaryDto},
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::faction::FactionService,
    },
};

pub static FACTION_TAG: &str = "factions";

/// List all factions ordered by name
#[utoipa::path(
    get,
    path = "/api/factions",
    tag = FACTION_TAG,
    responses(
        (status = 200, description = "All factions", body = Vec<FactionSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_factions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let faction_service = FactionService::new(&state.db);

    let faction_list = faction_service.list().await?;

    Ok((StatusCode::OK, Json(faction_list)))
}

/// Get a faction with its primary members, fleet and tags
#[utoipa::path(
    get,
    path = "/api/factions/slug/{slug}",
    tag = FACTION_TAG,
    params(("slug" = String, Path, description = "Faction slug")),
    responses(
        (status = 200, description = "Faction found", body = FactionDto),
        (status = 404, description = "Faction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faction_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let faction_service = FactionService::new(&state.db);

    let faction = faction_service
        .get_by_slug(&slug)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Faction))?;

    Ok((StatusCode::OK, Json(faction)))
}
