use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::TagModel;

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns all tags ordered by name
    pub async fn list(&self) -> Result<Vec<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Returns the tag with the provided name, creating it if it does not exist yet
    pub async fn get_or_create(&self, name: &str) -> Result<TagModel, DbErr> {
        if let Some(tag) = self.get_by_name(name).await? {
            return Ok(tag);
        }

        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tag.insert(self.db).await
    }
}
