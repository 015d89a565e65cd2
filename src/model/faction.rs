use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::{EntityRefDto, TagDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FactionSummaryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub alignment: Option<String>,
    pub leader: Option<String>,
    pub tags: Vec<TagDto>,
}

/// A character whose primary faction is the faction being viewed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FactionMemberDto {
    pub slug: String,
    pub name: String,
    pub callsign: Option<String>,
    pub role: Option<String>,
    pub primary_ship: Option<EntityRefDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FactionDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub alignment: Option<String>,
    pub leader: Option<String>,
    pub purpose: Option<String>,
    pub description: Option<String>,
    pub primary_members: Vec<FactionMemberDto>,
    pub ships: Vec<EntityRefDto>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
