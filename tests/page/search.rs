use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use datacore::client::routes::search::{search_page, SearchParams};
use serde_json::json;

use super::*;

fn constellation_fixtures() -> (serde_json::Value, serde_json::Value, serde_json::Value) {
    let characters = json!([
        {
            "id": 1, "slug": "gavin-cross", "name": "Gavin Cross",
            "callsign": "Cross", "role": "Captain", "species": "Human",
            "homeworld": "Mars", "image_url": null, "priority": 100,
            "primary_ship": { "slug": "the-constellation", "name": "The Constellation" },
            "primary_faction": { "slug": "veil", "name": "V.E.I.L." },
            "tags": [{ "id": 1, "name": "crew" }]
        }
    ]);
    let ships = json!([
        {
            "id": 1, "slug": "the-constellation", "name": "The Constellation",
            "nickname": null, "registry": null, "type": "Corvette-class",
            "image_url": null, "tags": []
        }
    ]);
    let factions = json!([
        {
            "id": 1, "slug": "veil", "name": "V.E.I.L.", "alignment": "Accord-aligned",
            "leader": null, "tags": []
        }
    ]);

    (characters, ships, factions)
}

/// Expect the ship and its captain when searching for the ship name
#[tokio::test]
async fn finds_ship_and_crew() -> Result<(), TestError> {
    let (characters, ships, factions) = constellation_fixtures();
    let test = TestBuilder::new()
        .with_api_endpoint("/api/characters", &characters, 1)
        .with_api_endpoint("/api/ships", &ships, 1)
        .with_api_endpoint("/api/factions", &factions, 1)
        .build()
        .await?;

    let resp = search_page(
        State(test.to_app_state::<AppState>()),
        Query(SearchParams {
            q: Some("Constellation".to_string()),
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("Showing 2 results"));
    assert!(html.contains("href=\"/characters/gavin-cross\""));
    assert!(html.contains("href=\"/ships/the-constellation\""));
    assert!(!html.contains("href=\"/factions/veil\""));
    test.assert_mocks();

    Ok(())
}

/// Expect a blank query to prompt for input without calling the API
#[tokio::test]
async fn blank_query_prompts_without_fetching() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_api_endpoint("/api/characters", 500, 0)
        .build()
        .await?;

    let resp = search_page(
        State(test.to_app_state::<AppState>()),
        Query(SearchParams {
            q: Some("   ".to_string()),
        }),
    )
    .await;

    let html = body_text(resp).await;
    assert!(html.contains("Type something in the search box."));
    assert!(!html.contains("No matches found"));
    test.assert_mocks();

    Ok(())
}

/// Expect a query with no hits to say so
#[tokio::test]
async fn reports_no_matches() -> Result<(), TestError> {
    let (characters, ships, factions) = constellation_fixtures();
    let test = TestBuilder::new()
        .with_api_endpoint("/api/characters", &characters, 1)
        .with_api_endpoint("/api/ships", &ships, 1)
        .with_api_endpoint("/api/factions", &factions, 1)
        .build()
        .await?;

    let resp = search_page(
        State(test.to_app_state::<AppState>()),
        Query(SearchParams {
            q: Some("leviathan".to_string()),
        }),
    )
    .await;

    let html = body_text(resp).await;
    assert!(html.contains("Showing 0 results"));
    assert!(html.contains("No matches found."));
    test.assert_mocks();

    Ok(())
}
