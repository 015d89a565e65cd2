//! API mock endpoint creation utilities.
//!
//! Pages reach the datacore API over HTTP; these helpers register canned responses on
//! the mock server so page handlers can be exercised without a running API.

use mockito::Mock;
use serde::Serialize;

use crate::{error::TestError, fixtures::api::ApiFixtures};

impl<'a> ApiFixtures<'a> {
    /// Create a mock GET endpoint returning `body` as JSON.
    ///
    /// # Arguments
    /// - `path` - Request path including the `/api` prefix, e.g. `/api/ships`
    /// - `body` - Value serialized as the response body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Ok(Mock)` - The created mock endpoint
    /// - `Err(TestError::SerdeJson)` - Body could not be serialized
    pub fn create_endpoint<T: Serialize>(
        &mut self,
        path: &str,
        body: &T,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(body)?;

        Ok(self.create_raw_endpoint(path, 200, body, expected_requests))
    }

    /// Create a mock GET endpoint answering with the given status and an error body.
    pub fn create_failing_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_raw_endpoint(
            path,
            status,
            r#"{"error":"Internal server error"}"#.to_string(),
            expected_requests,
        )
    }

    pub(crate) fn create_raw_endpoint(
        &mut self,
        path: &str,
        status: usize,
        body: String,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
