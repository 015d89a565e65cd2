use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::CatalogKind,
        character::{CharacterDto, CharacterInputDto, CharacterSummaryDto},
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "characters";

/// Parse a character id path segment, rejecting anything that is not an integer
pub fn parse_character_id(raw: &str) -> Result<i32, CatalogError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CatalogError::InvalidId(CatalogKind::Character))
}

/// List all characters, highest priority first
#[utoipa::path(
    get,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters = character_service.list().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a character dossier by slug
#[utoipa::path(
    get,
    path = "/api/characters/slug/{slug}",
    tag = CHARACTER_TAG,
    params(("slug" = String, Path, description = "Character slug")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let character = character_service
        .get_by_slug(&slug)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Character))?;

    Ok((StatusCode::OK, Json(character)))
}

/// Get a character dossier by numeric id
#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character id")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 400, description = "Invalid character id", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_character_id(&id)?;
    let character_service = CharacterService::new(&state.db);

    let character = character_service
        .get_by_id(id)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Character))?;

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character
///
/// `slug` and `name` are required; every other field is optional and `priority`
/// defaults to 0.
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CharacterInputDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "slug and name are required, or the body is not valid JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    body: Result<Json<CharacterInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = body.map_err(CatalogError::from)?;
    let character_service = CharacterService::new(&state.db);

    let character = character_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(character)))
}

/// Update a character, leaving fields absent from the body unchanged
#[utoipa::path(
    put,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character id")),
    request_body = CharacterInputDto,
    responses(
        (status = 200, description = "Character updated", body = CharacterDto),
        (status = 400, description = "Invalid character id or request body", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CharacterInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_character_id(&id)?;
    let Json(input) = body.map_err(CatalogError::from)?;
    let character_service = CharacterService::new(&state.db);

    let character = character_service
        .update(id, input)
        .await?
        .ok_or(CatalogError::NotFound(CatalogKind::Character))?;

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character and its memberships
#[utoipa::path(
    delete,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character id")),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 400, description = "Invalid character id", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_character_id(&id)?;
    let character_service = CharacterService::new(&state.db);

    if !character_service.delete(id).await? {
        return Err(CatalogError::NotFound(CatalogKind::Character).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
