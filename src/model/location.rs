use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::TagDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationSummaryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    /// Where the location sits in the galaxy
    pub region: Option<String>,
    pub dominant_species: Option<String>,
    pub primary_language: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub region: Option<String>,
    pub dominant_species: Option<String>,
    pub primary_language: Option<String>,
    pub overview: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::location::Model> for LocationSummaryDto {
    fn from(location: entity::location::Model) -> Self {
        Self {
            id: location.id,
            slug: location.slug,
            name: location.name,
            region: location.region,
            dominant_species: location.dominant_species,
            primary_language: location.primary_language,
            image_url: location.image_url,
        }
    }
}
