use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::TagDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoreSummaryDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub era: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoreDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub era: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::lore::Model> for LoreSummaryDto {
    fn from(lore: entity::lore::Model) -> Self {
        Self {
            id: lore.id,
            slug: lore.slug,
            title: lore.title,
            era: lore.era,
            image_url: lore.image_url,
        }
    }
}
