use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use datacore::client::routes::{character::character_page, lore::lore_page};
use serde_json::json;

use super::*;

/// Expect an unknown slug to render the not found page with HTTP 404
#[tokio::test]
async fn unknown_slug_renders_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_api_endpoint("/api/characters/slug/nobody", 404, 1)
        .build()
        .await?;

    let resp = character_page(
        State(test.to_app_state::<AppState>()),
        Path("nobody".to_string()),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let html = body_text(resp).await;
    assert!(html.contains("This entry is not in the Datacore."));
    test.assert_mocks();

    Ok(())
}

/// Expect a slug containing `?` to be looked up as-is rather than as a shorter slug
#[tokio::test]
async fn slug_with_query_character_renders_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "/api/characters/slug/gavin-cross?nope",
            &json!({ "slug": "gavin-cross", "name": "Gavin Cross" }),
            0,
        )
        .with_failing_api_endpoint("/api/characters/slug/gavin-cross%3Fnope", 404, 1)
        .build()
        .await?;

    let resp = character_page(
        State(test.to_app_state::<AppState>()),
        Path("gavin-cross?nope".to_string()),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let html = body_text(resp).await;
    assert!(!html.contains("Gavin Cross"));
    test.assert_mocks();

    Ok(())
}

/// Expect absent optional text to render placeholders and related entries to link by slug
#[tokio::test]
async fn character_renders_placeholders_and_links() -> Result<(), TestError> {
    let character = json!({
        "id": 1, "slug": "gavin-cross", "name": "Gavin Cross",
        "callsign": "Cross", "role": "Captain", "species": null, "homeworld": null,
        "bio": null, "image_url": null, "priority": 100,
        "primary_ship": { "slug": "the-constellation", "name": "The Constellation" },
        "primary_faction": null,
        "ships": [{ "slug": "the-constellation", "name": "The Constellation" }],
        "factions": [],
        "tags": [{ "id": 1, "name": "crew" }],
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-01T00:00:00"
    });
    let test = TestBuilder::new()
        .with_api_endpoint("/api/characters/slug/gavin-cross", &character, 1)
        .build()
        .await?;

    let resp = character_page(
        State(test.to_app_state::<AppState>()),
        Path("gavin-cross".to_string()),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("No bio yet."));
    assert!(html.contains("Cross — Captain"));
    assert!(html.contains("href=\"/ships/the-constellation\""));
    test.assert_mocks();

    Ok(())
}

/// Expect a lore entry without content to render its placeholder
#[tokio::test]
async fn lore_renders_content_placeholder() -> Result<(), TestError> {
    let lore = json!({
        "id": 1, "slug": "the-sundering", "title": "The Sundering", "era": null,
        "content": null, "image_url": null, "tags": [],
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-01T00:00:00"
    });
    let test = TestBuilder::new()
        .with_api_endpoint("/api/lore/slug/the-sundering", &lore, 1)
        .build()
        .await?;

    let resp = lore_page(
        State(test.to_app_state::<AppState>()),
        Path("the-sundering".to_string()),
    )
    .await;

    let html = body_text(resp).await;
    assert!(html.contains("The Sundering"));
    assert!(html.contains("No entry text yet."));
    test.assert_mocks();

    Ok(())
}
