//! Tests for the JSON API controllers.
//!
//! Handlers are called directly with an [`AppState`] backed by an in-memory SQLite
//! database, and their responses are converted with `IntoResponse` to check status codes
//! and bodies.

mod catalog;
mod character;
mod health;

use datacore::server::model::app::AppState;
use datacore_test_utils::prelude::*;

use crate::util::body_json;
