//! Helpers for reading axum responses in integration tests.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Collect a response body and decode it as JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

/// Collect a response body as UTF-8 text
pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not valid UTF-8")
}
