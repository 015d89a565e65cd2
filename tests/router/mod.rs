//! Tests that go through the full application router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use datacore::{
    model::api::{ErrorDto, HealthDto},
    server::{model::app::AppState, service::seed::SeedService, startup::build_router},
};
use datacore_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, body_text};

fn origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

/// Expect the health route to be reachable through the router
#[tokio::test]
async fn serves_health() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let router = build_router(test.to_app_state::<AppState>(), &origins());

    let resp = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: HealthDto = body_json(resp).await;
    assert_eq!(body.service, "starwoven-datacore");

    Ok(())
}

/// Expect the OpenAPI document to describe the character routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let router = build_router(test.to_app_state::<AppState>(), &origins());

    let resp = router
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/api/characters"]["post"].is_object());
    assert!(doc["paths"]["/api/characters/{id}"]["delete"].is_object());
    assert!(doc["paths"]["/api/lore/slug/{slug}"]["get"].is_object());

    Ok(())
}

/// Expect unknown paths to render the not found page with HTTP 404
#[tokio::test]
async fn unknown_path_renders_not_found_page() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let router = build_router(test.to_app_state::<AppState>(), &origins());

    let resp = router
        .oneshot(
            Request::get("/no/such/page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let html = body_text(resp).await;
    assert!(html.contains("Not found"));

    Ok(())
}

/// Expect a create request with a JSON body to go through the router
#[tokio::test]
async fn creates_character_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let router = build_router(test.to_app_state::<AppState>(), &origins());

    let resp = router
        .oneshot(
            Request::post("/api/characters")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"slug":"mira-vale","name":"Mira Vale"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect a body with a mistyped field to get a 400 JSON error
#[tokio::test]
async fn create_with_mistyped_field_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let router = build_router(test.to_app_state::<AppState>(), &origins());

    let resp = router
        .oneshot(
            Request::post("/api/characters")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"slug":"a","name":"A","priority":"high"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = body_json(resp).await;
    assert!(body.error.starts_with("Invalid request body"));

    Ok(())
}

/// Expect a body sent without a JSON content type to get a 400 JSON error
#[tokio::test]
async fn create_without_content_type_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let router = build_router(test.to_app_state::<AppState>(), &origins());

    let resp = router
        .oneshot(
            Request::post("/api/characters")
                .body(Body::from(r#"{"slug":"mira-vale","name":"Mira Vale"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = body_json(resp).await;
    assert!(body.error.starts_with("Invalid request body"));

    Ok(())
}

/// Expect an update with malformed JSON to get a 400 JSON error
#[tokio::test]
async fn update_with_malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character("gavin-cross", None, None)
        .build()
        .await?;
    let router = build_router(test.to_app_state::<AppState>(), &origins());

    let resp = router
        .oneshot(
            Request::put("/api/characters/1")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"role":"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = body_json(resp).await;
    assert!(body.error.starts_with("Invalid request body"));

    Ok(())
}

/// Expect a detail page slug with an encoded `?` to miss instead of matching a shorter slug
#[tokio::test]
async fn detail_page_keeps_encoded_slug_intact() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    SeedService::new(&test.db).seed().await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let state = AppState::from((test.db.clone(), base_url.clone()));
    let router = build_router(state, &origins());
    let server = tokio::spawn(async move { axum::serve(listener, router).await });

    let resp = reqwest::get(format!("{}/characters/gavin-cross%3Fnope", base_url))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    assert!(!resp.text().await.unwrap().contains("Gavin Cross"));

    let resp = reqwest::get(format!("{}/characters/gavin-cross", base_url))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    server.abort();

    Ok(())
}

/// Expect the search page to find seeded records through a live API
///
/// The router is served on a local port and the page fetches from that same server,
/// exercising the API surface, the HTTP client and the page rendering together.
#[tokio::test]
async fn search_page_reads_from_live_api() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    SeedService::new(&test.db).seed().await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let state = AppState::from((test.db.clone(), base_url.clone()));
    let router = build_router(state, &origins());
    let server = tokio::spawn(async move { axum::serve(listener, router).await });

    let html = reqwest::get(format!("{}/search?q=constellation", base_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("href=\"/ships/the-constellation\""));
    assert!(html.contains("href=\"/characters/gavin-cross\""));
    assert!(html.contains("Showing 4 results"));

    server.abort();

    Ok(())
}
