use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    data::catalog::load_related,
    model::db::{LoreModel, TagModel},
};

pub struct LoreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoreRepository<'a, C> {
    /// Creates a new instance of [`LoreRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns all lore entries ordered by title
    pub async fn list(&self) -> Result<Vec<LoreModel>, DbErr> {
        entity::prelude::Lore::find()
            .order_by_asc(entity::lore::Column::Title)
            .all(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<LoreModel>, DbErr> {
        entity::prelude::Lore::find()
            .filter(entity::lore::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_tags(&self, lore_ids: &[i32]) -> Result<HashMap<i32, Vec<TagModel>>, DbErr> {
        load_related::<_, entity::prelude::LoreTag, entity::prelude::Tag, _>(
            self.db,
            entity::lore_tag::Column::LoreId,
            lore_ids,
            entity::tag::Column::Name,
            |link| link.lore_id,
        )
        .await
    }
}
