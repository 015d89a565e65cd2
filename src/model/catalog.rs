use serde::{Deserialize, Serialize};

/// A tag attached to any catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
}

/// A lightweight reference to another catalog entry, enough to render a link
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EntityRefDto {
    pub slug: String,
    pub name: String,
}

impl From<entity::tag::Model> for TagDto {
    fn from(tag: entity::tag::Model) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

impl From<entity::ship::Model> for EntityRefDto {
    fn from(ship: entity::ship::Model) -> Self {
        Self {
            slug: ship.slug,
            name: ship.name,
        }
    }
}

impl From<entity::faction::Model> for EntityRefDto {
    fn from(faction: entity::faction::Model) -> Self {
        Self {
            slug: faction.slug,
            name: faction.name,
        }
    }
}

impl From<entity::character::Model> for EntityRefDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            slug: character.slug,
            name: character.name,
        }
    }
}

/// The seven kinds of catalog entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Character,
    Ship,
    Faction,
    Episode,
    Location,
    Technology,
    Lore,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 7] = [
        Self::Character,
        Self::Faction,
        Self::Ship,
        Self::Location,
        Self::Episode,
        Self::Technology,
        Self::Lore,
    ];

    /// Path segment shared by the API (`/api/{segment}`) and the pages (`/{segment}`)
    pub fn path(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Ship => "ships",
            Self::Faction => "factions",
            Self::Episode => "episodes",
            Self::Location => "locations",
            Self::Technology => "technology",
            Self::Lore => "lore",
        }
    }

    /// Human readable name used in headings and not found messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Ship => "Ship",
            Self::Faction => "Faction",
            Self::Episode => "Episode",
            Self::Location => "Location",
            Self::Technology => "Technology",
            Self::Lore => "Lore entry",
        }
    }

    /// Heading of the list page
    pub fn plural(self) -> &'static str {
        match self {
            Self::Character => "Characters",
            Self::Ship => "Ships",
            Self::Faction => "Factions",
            Self::Episode => "Episodes",
            Self::Location => "Locations",
            Self::Technology => "Technology",
            Self::Lore => "Lore",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Ship => "ship",
            Self::Faction => "faction",
            Self::Episode => "episode",
            Self::Location => "location",
            Self::Technology => "technology",
            Self::Lore => "lore",
        }
    }
}
