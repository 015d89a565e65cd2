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
        location::{LocationDto, LocationSummaryDto},
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::location::LocationService,
    },
};

pub static LOCATION_TAG: &str = "locations";

/// List all locations ordered by name
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "All locations", body = Vec<LocationSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_locations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let location_service = LocationService::new(&state.db);

    let location_list = location_service.list().await?;

    Ok((StatusCode::OK, Json(location_list)))
}

/// Get a location and its tags
#[utoipa::path(
    get,
    path = "/api/locations/slug/{slug}",
    tag = LOCATION_TAG,
    params(("slug" = String, Path, description = "Location slug")),
    responses(
        (status = 200, description = "Location found", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let location_service = LocationService::new(&state.db);

    let location = location_service
        .get_by_slug(&slug)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Location))?;

    Ok((StatusCode::OK, Json(location)))
}
