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
        lore::{LoreDto, LoreSummaryDto},
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::lore::LoreService,
    },
};

pub static LORE_TAG: &str = "lore";

/// List all lore entries ordered by title
#[utoipa::path(
    get,
    path = "/api/lore",
    tag = LORE_TAG,
    responses(
        (status = 200, description = "All lore entries", body = Vec<LoreSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_lore(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let lore_service = LoreService::new(&state.db);

    let lore_list = lore_service.list().await?;

    Ok((StatusCode::OK, Json(lore_list)))
}

/// Get a lore entry and its tags
#[utoipa::path(
    get,
    path = "/api/lore/slug/{slug}",
    tag = LORE_TAG,
    params(("slug" = String, Path, description = "Lore entry slug")),
    responses(
        (status = 200, description = "Lore entry found", body = LoreDto),
        (status = 404, description = "Lore entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lore_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let lore_service = LoreService::new(&state.db);

    let lore = lore_service
        .get_by_slug(&slug)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Lore))?;

    Ok((StatusCode::OK, Json(lore)))
}
