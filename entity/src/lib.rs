//! SeaORM entity definitions for the Starwoven datacore schema.

pub mod prelude;

pub mod character;
pub mod character_faction;
pub mod character_ship;
pub mod character_tag;
pub mod episode;
pub mod episode_cast;
pub mod episode_tag;
pub mod faction;
pub mod faction_ship;
pub mod faction_tag;
pub mod location;
pub mod location_tag;
pub mod lore;
pub mod lore_tag;
pub mod ship;
pub mod ship_tag;
pub mod tag;
pub mod technology;
pub mod technology_tag;
