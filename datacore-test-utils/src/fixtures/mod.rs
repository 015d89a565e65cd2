//! Test fixture modules for database and HTTP mock creation.
//!
//! - `catalog` - catalog rows (tags, ships, factions, characters, episodes, locations,
//!   technology, lore) and the join rows between them
//! - `api` - mock endpoints standing in for the datacore API

pub mod api;
pub mod catalog;
