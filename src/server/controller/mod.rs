//! HTTP controller endpoints for the datacore API.
//!
//! Axum handlers for the catalog list/detail endpoints, character editing and the health
//! check. Controllers parse path parameters, call the services, translate absent rows
//! into 404 responses and are documented for OpenAPI with utoipa.

pub mod character;
pub mod episode;
pub mod faction;
pub mod health;
pub mod location;
pub mod lore;
pub mod ship;
pub mod technology;
