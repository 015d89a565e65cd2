use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::{EntityRefDto, TagDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipSummaryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub nickname: Option<String>,
    pub registry: Option<String>,
    #[serde(rename = "type")]
    pub ship_type: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<TagDto>,
}

/// A character whose primary ship is the ship being viewed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CrewMemberDto {
    pub slug: String,
    pub name: String,
    pub callsign: Option<String>,
    pub role: Option<String>,
    pub primary_faction: Option<EntityRefDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub nickname: Option<String>,
    pub registry: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub ship_type: Option<String>,
    pub year_built: Option<i32>,
    pub specs: Option<String>,
    pub history: Option<String>,
    pub image_url: Option<String>,
    pub primary_crew: Vec<CrewMemberDto>,
    pub factions: Vec<EntityRefDto>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
