use axum::{http::StatusCode, response::IntoResponse};
use datacore::{model::api::HealthDto, server::controller::health::health};

use crate::util::body_json;

/// Expect the health check to name the service
#[tokio::test]
async fn reports_ok() {
    let resp = health().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: HealthDto = body_json(resp).await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.service, "starwoven-datacore");
}
