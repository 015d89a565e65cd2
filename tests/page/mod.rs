//! Tests for the server-rendered pages.
//!
//! Page handlers fetch from the API over HTTP, so each test points the [`AppState`] API
//! client at the mock server and registers the responses the page should see.

mod detail;
mod list;
mod search;

use datacore::server::model::app::AppState;
use datacore_test_utils::prelude::*;

use crate::util::body_text;
