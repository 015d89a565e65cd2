//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main datacore crate so fixtures and tests read the
//! same way on both sides.

pub type TagModel = entity::tag::Model;

pub type CharacterModel = entity::character::Model;

pub type ShipModel = entity::ship::Model;

pub type FactionModel = entity::faction::Model;

pub type EpisodeModel = entity::episode::Model;

pub type LocationModel = entity::location::Model;

pub type TechnologyModel = entity::technology::Model;

pub type LoreModel = entity::lore::Model;
