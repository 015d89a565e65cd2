//! Tests for the read-only list and detail endpoints of the other six kinds.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use datacore::{
    model::{
        api::ErrorDto,
        episode::{EpisodeDto, EpisodeSummaryDto},
        faction::FactionDto,
        lore::LoreSummaryDto,
        ship::{ShipDto, ShipSummaryDto},
        technology::TechnologyDto,
    },
    server::controller::{
        episode::{get_episode_by_slug, list_episodes},
        faction::get_faction_by_slug,
        location::{get_location_by_slug, list_locations},
        lore::{get_lore_by_slug, list_lore},
        ship::{get_ship_by_slug, list_ships},
        technology::get_technology_by_slug,
    },
};

use super::*;

/// Expect an empty array rather than an error when there are no ships
#[tokio::test]
async fn list_ships_returns_empty_array() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = list_ships(State(test.to_app_state::<AppState>())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<ShipSummaryDto> = body_json(resp).await;
    assert!(body.is_empty());

    Ok(())
}

/// Expect repeated reads without writes to return identical arrays
#[tokio::test]
async fn list_ships_is_stable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_ship("the-constellation")
        .with_mock_ship("ashen-wake")
        .with_mock_tag("ship")
        .build()
        .await?;

    let first: Vec<ShipSummaryDto> =
        body_json(list_ships(State(test.to_app_state::<AppState>())).await.into_response()).await;
    let second: Vec<ShipSummaryDto> =
        body_json(list_ships(State(test.to_app_state::<AppState>())).await.into_response()).await;

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].slug, "ashen-wake");

    Ok(())
}

/// Expect the ship detail to list its primary crew and operating factions
#[tokio::test]
async fn get_ship_includes_crew_and_factions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("gavin-cross", Some("the-constellation"), Some("veil"))
        .build()
        .await?;
    let ship = test.catalog().insert_mock_ship("the-constellation").await?;
    let faction = test.catalog().insert_mock_faction("veil").await?;
    test.catalog().link_faction_ship(faction.id, ship.id).await?;

    let result = get_ship_by_slug(
        State(test.to_app_state::<AppState>()),
        Path("the-constellation".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ShipDto = body_json(resp).await;
    assert_eq!(body.primary_crew.len(), 1);
    assert_eq!(body.primary_crew[0].slug, "gavin-cross");
    assert_eq!(
        body.primary_crew[0].primary_faction.as_ref().map(|f| f.slug.as_str()),
        Some("veil")
    );
    assert_eq!(body.factions.len(), 1);

    Ok(())
}

/// Expect the faction detail to list its primary members with their ships
#[tokio::test]
async fn get_faction_includes_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("sora-caddell", Some("the-constellation"), Some("veil"))
        .build()
        .await?;

    let result = get_faction_by_slug(
        State(test.to_app_state::<AppState>()),
        Path("veil".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: FactionDto = body_json(resp).await;
    assert_eq!(body.primary_members.len(), 1);
    assert_eq!(
        body.primary_members[0].primary_ship.as_ref().map(|s| s.slug.as_str()),
        Some("the-constellation")
    );

    Ok(())
}

/// Expect episodes in season and episode order, with the cast on the detail
#[tokio::test]
async fn episodes_are_ordered_and_include_cast() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    test.catalog().insert_mock_episode("rift-call", 2, 1).await?;
    let pilot = test.catalog().insert_mock_episode("pilot", 1, 1).await?;
    test.catalog().insert_mock_episode("dead-drop", 1, 2).await?;
    let character = test
        .catalog()
        .insert_mock_character("gavin-cross", None, None)
        .await?;
    test.catalog().add_to_cast(pilot.id, character.id).await?;

    let list: Vec<EpisodeSummaryDto> = body_json(
        list_episodes(State(test.to_app_state::<AppState>()))
            .await
            .into_response(),
    )
    .await;
    let slugs: Vec<&str> = list.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["pilot", "dead-drop", "rift-call"]);

    let detail: EpisodeDto = body_json(
        get_episode_by_slug(
            State(test.to_app_state::<AppState>()),
            Path("pilot".to_string()),
        )
        .await
        .into_response(),
    )
    .await;
    assert_eq!(detail.main_cast.len(), 1);
    assert_eq!(detail.main_cast[0].slug, "gavin-cross");

    Ok(())
}

/// Expect a kind-specific not found message for each detail endpoint
#[tokio::test]
async fn detail_endpoints_return_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let missing = || Path("missing".to_string());

    let cases = vec![
        (
            get_ship_by_slug(State(test.to_app_state::<AppState>()), missing())
                .await
                .into_response(),
            "Ship not found",
        ),
        (
            get_faction_by_slug(State(test.to_app_state::<AppState>()), missing())
                .await
                .into_response(),
            "Faction not found",
        ),
        (
            get_episode_by_slug(State(test.to_app_state::<AppState>()), missing())
                .await
                .into_response(),
            "Episode not found",
        ),
        (
            get_location_by_slug(State(test.to_app_state::<AppState>()), missing())
                .await
                .into_response(),
            "Location not found",
        ),
        (
            get_technology_by_slug(State(test.to_app_state::<AppState>()), missing())
                .await
                .into_response(),
            "Technology not found",
        ),
        (
            get_lore_by_slug(State(test.to_app_state::<AppState>()), missing())
                .await
                .into_response(),
            "Lore entry not found",
        ),
    ];

    for (resp, message) in cases {
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, message);
    }

    Ok(())
}

/// Expect location and lore lists ordered alphabetically
#[tokio::test]
async fn locations_and_lore_are_alphabetical() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    test.catalog().insert_mock_location("vesper-station").await?;
    test.catalog().insert_mock_location("ashfall").await?;
    test.catalog().insert_mock_lore("the-sundering").await?;
    test.catalog().insert_mock_lore("age-of-embers").await?;

    let locations: Vec<serde_json::Value> = body_json(
        list_locations(State(test.to_app_state::<AppState>()))
            .await
            .into_response(),
    )
    .await;
    assert_eq!(locations[0]["slug"], "ashfall");

    let lore: Vec<LoreSummaryDto> = body_json(
        list_lore(State(test.to_app_state::<AppState>()))
            .await
            .into_response(),
    )
    .await;
    assert_eq!(lore[0].title, "Age Of Embers");

    Ok(())
}

/// Expect technology detail to carry its tags
#[tokio::test]
async fn get_technology_includes_tags() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let technology = test.catalog().insert_mock_technology("arcwave-drive").await?;
    let tag = test.catalog().insert_mock_tag("propulsion").await?;
    test.catalog().tag_technology(technology.id, tag.id).await?;

    let result = get_technology_by_slug(
        State(test.to_app_state::<AppState>()),
        Path("arcwave-drive".to_string()),
    )
    .await;

    let body: TechnologyDto = body_json(result.into_response()).await;
    assert_eq!(body.tags.len(), 1);
    assert_eq!(body.tags[0].name, "propulsion");

    Ok(())
}
