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
        episode::{EpisodeDto, EpisodeSummaryDto},
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::episode::EpisodeService,
    },
};

pub static EPISODE_TAG: &str = "episodes";

/// List all episodes by season and episode number
#[utoipa::path(
    get,
    path = "/api/episodes",
    tag = EPISODE_TAG,
    responses(
        (status = 200, description = "All episodes", body = Vec<EpisodeSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_episodes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let episode_service = EpisodeService::new(&state.db);

    let episode_list = episode_service.list().await?;

    Ok((StatusCode::OK, Json(episode_list)))
}

/// Get an episode with its main cast and tags
#[utoipa::path(
    get,
    path = "/api/episodes/slug/{slug}",
    tag = EPISODE_TAG,
    params(("slug" = String, Path, description = "Episode slug")),
    responses(
        (status = 200, description = "Episode found", body = EpisodeDto),
        (status = 404, description = "Episode not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_episode_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let episode_service = EpisodeService::new(&state.db);

    let episode = episode_service
        .get_by_slug(&slug)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Episode))?;

    Ok((StatusCode::OK, Json(episode)))
}
