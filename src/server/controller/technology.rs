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
        technology::{TechnologyDto, TechnologySummaryDto},
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::technology::TechnologyService,
    },
};

pub static TECHNOLOGY_TAG: &str = "technology";

/// List all technology ordered by name
#[utoipa::path(
    get,
    path = "/api/technology",
    tag = TECHNOLOGY_TAG,
    responses(
        (status = 200, description = "All technology", body = Vec<TechnologySummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_technology(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let technology_service = TechnologyService::new(&state.db);

    let technology_list = technology_service.list().await?;

    Ok((StatusCode::OK, Json(technology_list)))
}

/// Get a piece of technology and its tags
#[utoipa::path(
    get,
    path = "/api/technology/slug/{slug}",
    tag = TECHNOLOGY_TAG,
    params(("slug" = String, Path, description = "Technology slug")),
    responses(
        (status = 200, description = "Technology found", body = TechnologyDto),
        (status = 404, description = "Technology not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_technology_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let technology_service = TechnologyService::new(&state.db);

    let technology = technology_service
        .get_by_slug(&slug)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Technology))?;

    Ok((StatusCode::OK, Json(technology)))
}
