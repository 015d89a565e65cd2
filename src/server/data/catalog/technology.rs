use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    data::catalog::load_related,
    model::db::{TagModel, TechnologyModel},
};

pub struct TechnologyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TechnologyRepository<'a, C> {
    /// Creates a new instance of [`TechnologyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<TechnologyModel>, DbErr> {
        entity::prelude::Technology::find()
            .order_by_asc(entity::technology::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<TechnologyModel>, DbErr> {
        entity::prelude::Technology::find()
            .filter(entity::technology::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_tags(
        &self,
        technology_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TagModel>>, DbErr> {
        load_related::<_, entity::prelude::TechnologyTag, entity::prelude::Tag, _>(
            self.db,
            entity::technology_tag::Column::TechnologyId,
            technology_ids,
            entity::tag::Column::Name,
            |link| link.technology_id,
        )
        .await
    }
}
