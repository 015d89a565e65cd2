use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::catalog::{EntityRefDto, TagDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EpisodeSummaryDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub season: i32,
    pub episode: i32,
    pub discovery: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EpisodeDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub season: i32,
    pub episode: i32,
    pub discovery: Option<String>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    pub main_cast: Vec<EntityRefDto>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::episode::Model> for EpisodeSummaryDto {
    fn from(episode: entity::episode::Model) -> Self {
        Self {
            id: episode.id,
            slug: episode.slug,
            title: episode.title,
            season: episode.season,
            episode: episode.episode,
            discovery: episode.discovery,
            image_url: episode.image_url,
        }
    }
}
