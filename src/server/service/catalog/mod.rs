//! Catalog services.
//!
//! Each service composes the repositories of one entity kind into the list and detail
//! projections served by the API. Absent rows are reported as `Ok(None)`; turning that
//! into a 404 is left to the controllers.

pub mod character;
pub mod episode;
pub mod faction;
pub mod location;
pub mod lore;
pub mod ship;
pub mod technology;

use std::collections::HashMap;

use crate::{
    model::catalog::{EntityRefDto, TagDto},
    server::model::db::TagModel,
};

/// Remove the tags loaded for `owner_id`, converting them to DTOs.
pub(crate) fn take_tags(tags: &mut HashMap<i32, Vec<TagModel>>, owner_id: i32) -> Vec<TagDto> {
    tags.remove(&owner_id)
        .unwrap_or_default()
        .into_iter()
        .map(TagDto::from)
        .collect()
}

/// Remove the associations loaded for `owner_id`, converting them to entity references.
pub(crate) fn take_refs<M>(related: &mut HashMap<i32, Vec<M>>, owner_id: i32) -> Vec<EntityRefDto>
where
    EntityRefDto: From<M>,
{
    related
        .remove(&owner_id)
        .unwrap_or_default()
        .into_iter()
        .map(EntityRefDto::from)
        .collect()
}

/// Index entity references by row id for lookups of primary ship / faction references.
pub(crate) fn index_refs<M, F>(models: Vec<M>, id_of: F) -> HashMap<i32, EntityRefDto>
where
    EntityRefDto: From<M>,
    F: Fn(&M) -> i32,
{
    models
        .into_iter()
        .map(|model| (id_of(&model), EntityRefDto::from(model)))
        .collect()
}

/// Distinct non-null ids, in first seen order.
pub(crate) fn distinct_ids(ids: impl Iterator<Item = Option<i32>>) -> Vec<i32> {
    let mut distinct = Vec::new();
    for id in ids.flatten() {
        if !distinct.contains(&id) {
            distinct.push(id);
        }
    }
    distinct
}
