//! Tests for the character endpoints, including the administrative create, update and
//! delete operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use datacore::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CharacterInputDto, CharacterSummaryDto},
    },
    server::controller::character::{
        create_character, delete_character, get_character, get_character_by_slug,
        list_characters, update_character,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

async fn character_count(test: &TestContext) -> Result<u64, TestError> {
    Ok(entity::prelude::Character::find().count(&test.db).await?)
}

/// Expect 404 with a not found body for an unknown slug
#[tokio::test]
async fn get_by_slug_returns_not_found_for_unknown_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_character_by_slug(
        State(test.to_app_state::<AppState>()),
        Path("does-not-exist".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Character not found");

    Ok(())
}

/// Expect the dossier with its primary ship and faction for a known slug
#[tokio::test]
async fn get_by_slug_returns_dossier() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("gavin-cross", Some("the-constellation"), Some("veil"))
        .build()
        .await?;

    let result = get_character_by_slug(
        State(test.to_app_state::<AppState>()),
        Path("gavin-cross".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: CharacterDto = body_json(resp).await;
    assert_eq!(body.slug, "gavin-cross");
    assert_eq!(
        body.primary_ship.map(|s| s.slug),
        Some("the-constellation".to_string())
    );
    assert_eq!(body.primary_faction.map(|f| f.slug), Some("veil".to_string()));

    Ok(())
}

/// Expect 400 for a non-numeric id
#[tokio::test]
async fn get_by_id_rejects_invalid_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_character(
        State(test.to_app_state::<AppState>()),
        Path("abc".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Invalid character id");

    Ok(())
}

/// Expect 404 for a numeric id with no row
#[tokio::test]
async fn get_by_id_returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_character(
        State(test.to_app_state::<AppState>()),
        Path("999".to_string()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 and no new row when the name is missing
#[tokio::test]
async fn create_without_name_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let before = character_count(&test).await?;

    let input = CharacterInputDto {
        slug: Some("nameless".to_string()),
        ..Default::default()
    };
    let result = create_character(State(test.to_app_state::<AppState>()), Ok(Json(input))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "slug and name are required");
    assert_eq!(character_count(&test).await?, before);

    Ok(())
}

/// Expect 400 when slug and name are only whitespace
#[tokio::test]
async fn create_with_blank_fields_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let input = CharacterInputDto {
        slug: Some("   ".to_string()),
        name: Some(" ".to_string()),
        ..Default::default()
    };
    let result = create_character(State(test.to_app_state::<AppState>()), Ok(Json(input))).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(character_count(&test).await?, 0);

    Ok(())
}

/// Expect 201 with priority defaulting to 0
#[tokio::test]
async fn create_returns_created_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let input = CharacterInputDto {
        slug: Some("mira-vale".to_string()),
        name: Some("Mira Vale".to_string()),
        role: Some("Pilot".to_string()),
        ..Default::default()
    };
    let result = create_character(State(test.to_app_state::<AppState>()), Ok(Json(input))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: CharacterDto = body_json(resp).await;
    assert_eq!(body.slug, "mira-vale");
    assert_eq!(body.role.as_deref(), Some("Pilot"));
    assert_eq!(body.priority, 0);
    assert!(body.tags.is_empty());
    assert_eq!(character_count(&test).await?, 1);

    Ok(())
}

/// Expect fields absent from the body to keep their stored values
#[tokio::test]
async fn update_changes_only_present_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let character = test
        .catalog()
        .insert_mock_character_with_priority("sora-caddell", 90)
        .await?;

    let input = CharacterInputDto {
        role: Some("XO".to_string()),
        ..Default::default()
    };
    let result = update_character(
        State(test.to_app_state::<AppState>()),
        Path(character.id.to_string()),
        Ok(Json(input)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: CharacterDto = body_json(resp).await;
    assert_eq!(body.role.as_deref(), Some("XO"));
    assert_eq!(body.name, character.name);
    assert_eq!(body.species, character.species);
    assert_eq!(body.priority, 90);

    Ok(())
}

/// Expect 404 when updating an unknown id
#[tokio::test]
async fn update_returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = update_character(
        State(test.to_app_state::<AppState>()),
        Path("42".to_string()),
        Ok(Json(CharacterInputDto::default())),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 and the row gone, along with its tag memberships
#[tokio::test]
async fn delete_removes_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let character = test
        .catalog()
        .insert_mock_character("levi-rosko-roskins", None, None)
        .await?;
    let tag = test.catalog().insert_mock_tag("crew").await?;
    test.catalog().tag_character(character.id, tag.id).await?;

    let result = delete_character(
        State(test.to_app_state::<AppState>()),
        Path(character.id.to_string()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(character_count(&test).await?, 0);
    assert_eq!(
        entity::prelude::CharacterTag::find().count(&test.db).await?,
        0
    );

    Ok(())
}

/// Expect 404 when deleting an unknown id and 400 for a malformed one
#[tokio::test]
async fn delete_rejects_unknown_and_invalid_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let missing = delete_character(
        State(test.to_app_state::<AppState>()),
        Path("7".to_string()),
    )
    .await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    let invalid = delete_character(
        State(test.to_app_state::<AppState>()),
        Path("seven".to_string()),
    )
    .await;
    assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect characters ordered by priority, then name
#[tokio::test]
async fn list_orders_by_priority() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    test.catalog()
        .insert_mock_character_with_priority("levi-rosko-roskins", 80)
        .await?;
    test.catalog()
        .insert_mock_character_with_priority("gavin-cross", 100)
        .await?;
    test.catalog()
        .insert_mock_character_with_priority("sora-caddell", 90)
        .await?;

    let result = list_characters(State(test.to_app_state::<AppState>())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<CharacterSummaryDto> = body_json(resp).await;
    let slugs: Vec<&str> = body.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["gavin-cross", "sora-caddell", "levi-rosko-roskins"]);

    Ok(())
}
