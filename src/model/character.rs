use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::{EntityRefDto, TagDto};

/// Character card data returned by the character list endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterSummaryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub callsign: Option<String>,
    pub role: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub image_url: Option<String>,
    pub priority: i32,
    pub primary_ship: Option<EntityRefDto>,
    pub primary_faction: Option<EntityRefDto>,
    pub tags: Vec<TagDto>,
}

/// Full character dossier returned by the detail endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub callsign: Option<String>,
    pub role: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub priority: i32,
    pub primary_ship: Option<EntityRefDto>,
    pub primary_faction: Option<EntityRefDto>,
    /// Every ship the character has served on, including the primary one
    pub ships: Vec<EntityRefDto>,
    /// Every faction the character belongs to, including the primary one
    pub factions: Vec<EntityRefDto>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or updating a character
///
/// Every field is optional at the type level so that validation can report missing
/// fields with a JSON error instead of a deserialization rejection. Creation requires
/// `slug` and `name`; updates only touch the fields that are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterInputDto {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub callsign: Option<String>,
    pub role: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub priority: Option<i32>,
}
