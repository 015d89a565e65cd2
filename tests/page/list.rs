use axum::{extract::State, http::StatusCode};
use datacore::client::routes::{character::characters_page, ship::ships_page};
use serde_json::json;

use super::*;

/// Expect a failing list fetch to render the empty state instead of an error
#[tokio::test]
async fn failing_fetch_renders_empty_state() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_api_endpoint("/api/characters", 500, 1)
        .build()
        .await?;

    let resp = characters_page(State(test.to_app_state::<AppState>())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("0 total"));
    assert!(html.contains("No characters yet."));
    test.assert_mocks();

    Ok(())
}

/// Expect characters rendered highest priority first regardless of API order
#[tokio::test]
async fn characters_are_sorted_by_priority() -> Result<(), TestError> {
    let characters = json!([
        {
            "id": 3, "slug": "levi-rosko-roskins", "name": "Levi Roskins",
            "callsign": null, "role": "Security / Combat", "species": "Human",
            "homeworld": "Mars", "image_url": null, "priority": 80,
            "primary_ship": null, "primary_faction": null, "tags": []
        },
        {
            "id": 1, "slug": "gavin-cross", "name": "Gavin Cross",
            "callsign": "Cross", "role": "Captain", "species": "Human",
            "homeworld": "Mars", "image_url": null, "priority": 100,
            "primary_ship": { "slug": "the-constellation", "name": "The Constellation" },
            "primary_faction": null, "tags": [{ "id": 1, "name": "crew" }]
        }
    ]);
    let test = TestBuilder::new()
        .with_api_endpoint("/api/characters", &characters, 1)
        .build()
        .await?;

    let resp = characters_page(State(test.to_app_state::<AppState>())).await;
    let html = body_text(resp).await;

    let gavin = html.find("Gavin Cross").expect("Gavin Cross should render");
    let levi = html.find("Levi Roskins").expect("Levi Roskins should render");
    assert!(gavin < levi);
    assert!(html.contains("2 total"));
    assert!(html.contains("Ship: The Constellation"));
    assert!(html.contains("href=\"/characters/gavin-cross\""));
    test.assert_mocks();

    Ok(())
}

/// Expect ship cards to show the ship type and tags
#[tokio::test]
async fn ships_render_type_and_tags() -> Result<(), TestError> {
    let ships = json!([
        {
            "id": 1, "slug": "the-constellation", "name": "The Constellation",
            "nickname": "Constellation", "registry": "ISV-31835", "type": "Corvette-class",
            "image_url": null, "tags": [{ "id": 2, "name": "ship" }]
        }
    ]);
    let test = TestBuilder::new()
        .with_api_endpoint("/api/ships", &ships, 1)
        .build()
        .await?;

    let resp = ships_page(State(test.to_app_state::<AppState>())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("Corvette-class"));
    assert!(html.contains("ISV-31835"));
    assert!(html.contains(">ship<"));
    test.assert_mocks();

    Ok(())
}
