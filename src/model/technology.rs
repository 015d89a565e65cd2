use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::TagDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TechnologySummaryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub origin_species: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TechnologyDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub origin_species: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::technology::Model> for TechnologySummaryDto {
    fn from(technology: entity::technology::Model) -> Self {
        Self {
            id: technology.id,
            slug: technology.slug,
            name: technology.name,
            origin_species: technology.origin_species,
            status: technology.status,
            image_url: technology.image_url,
        }
    }
}
