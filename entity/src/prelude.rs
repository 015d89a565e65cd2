pub use super::character::Entity as Character;
pub use super::character_faction::Entity as CharacterFaction;
pub use super::character_ship::Entity as CharacterShip;
pub use super::character_tag::Entity as CharacterTag;
pub use super::episode::Entity as Episode;
pub use super::episode_cast::Entity as EpisodeCast;
pub use super::episode_tag::Entity as EpisodeTag;
pub use super::faction::Entity as Faction;
pub use super::faction_ship::Entity as FactionShip;
pub use super::faction_tag::Entity as FactionTag;
pub use super::location::Entity as Location;
pub use super::location_tag::Entity as LocationTag;
pub use super::lore::Entity as Lore;
pub use super::lore_tag::Entity as LoreTag;
pub use super::ship::Entity as Ship;
pub use super::ship_tag::Entity as ShipTag;
pub use super::tag::Entity as Tag;
pub use super::technology::Entity as Technology;
pub use super::technology_tag::Entity as TechnologyTag;
