//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the data and service layers,
//! so signatures don't have to spell out `entity::<table>::Model` everywhere.

/// A tag shared by every kind of catalog entry.
pub type TagModel = entity::tag::Model;

/// A character, with optional primary ship and primary faction foreign keys.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key, internal join key
/// - `slug` - Unique external lookup key
/// - `priority` - Display ordering, higher first, defaults to 0
/// - `primary_ship_id` - Foreign key to the character's primary ship (nullable)
/// - `primary_faction_id` - Foreign key to the character's primary faction (nullable)
pub type CharacterModel = entity::character::Model;

/// A ship.
pub type ShipModel = entity::ship::Model;

/// A faction.
pub type FactionModel = entity::faction::Model;

/// An episode, ordered by season then episode number.
pub type EpisodeModel = entity::episode::Model;

/// A location; `region` holds where in the galaxy it sits.
pub type LocationModel = entity::location::Model;

/// A piece of technology.
pub type TechnologyModel = entity::technology::Model;

/// A lore entry.
pub type LoreModel = entity::lore::Model;
