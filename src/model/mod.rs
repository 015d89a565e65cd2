//! Data transfer objects shared by the API surface and the server-rendered pages.
//!
//! The API serializes these types as JSON and the page layer deserializes the very same
//! types from the API responses, so both ends agree on field names by construction.

pub mod api;
pub mod catalog;
pub mod character;
pub mod episode;
pub mod faction;
pub mod location;
pub mod lore;
pub mod ship;
pub mod technology;
