use std::collections::HashMap;

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::catalog::{load_related, replace_links},
    model::db::{FactionModel, ShipModel, TagModel},
};

pub struct ShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    /// Creates a new instance of [`ShipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ShipModel>, DbErr> {
        entity::prelude::Ship::find()
            .order_by_asc(entity::ship::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ShipModel>, DbErr> {
        entity::prelude::Ship::find()
            .filter(entity::ship::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Ships with the provided row ids, missing ids are skipped
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<ShipModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ship::find()
            .filter(entity::ship::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Inserts the ship or, if the slug is already taken, overwrites that row
    pub async fn upsert(&self, ship: entity::ship::ActiveModel) -> Result<ShipModel, DbErr> {
        entity::prelude::Ship::insert(ship)
            .on_conflict(
                OnConflict::column(entity::ship::Column::Slug)
                    .update_columns([
                        entity::ship::Column::Name,
                        entity::ship::Column::Nickname,
                        entity::ship::Column::Registry,
                        entity::ship::Column::Manufacturer,
                        entity::ship::Column::ShipModel,
                        entity::ship::Column::ShipType,
                        entity::ship::Column::YearBuilt,
                        entity::ship::Column::Specs,
                        entity::ship::Column::History,
                        entity::ship::Column::ImageUrl,
                        entity::ship::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Tags for each of the provided ships, ordered by name
    pub async fn get_tags(&self, ship_ids: &[i32]) -> Result<HashMap<i32, Vec<TagModel>>, DbErr> {
        load_related::<_, entity::prelude::ShipTag, entity::prelude::Tag, _>(
            self.db,
            entity::ship_tag::Column::ShipId,
            ship_ids,
            entity::tag::Column::Name,
            |link| link.ship_id,
        )
        .await
    }

    /// Factions operating each of the provided ships, ordered by name
    pub async fn get_factions(
        &self,
        ship_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<FactionModel>>, DbErr> {
        load_related::<_, entity::prelude::FactionShip, entity::prelude::Faction, _>(
            self.db,
            entity::faction_ship::Column::ShipId,
            ship_ids,
            entity::faction::Column::Name,
            |link| link.ship_id,
        )
        .await
    }

    pub async fn set_tags(&self, ship_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        let links = tag_ids
            .iter()
            .map(|tag_id| entity::ship_tag::ActiveModel {
                ship_id: ActiveValue::Set(ship_id),
                tag_id: ActiveValue::Set(*tag_id),
            })
            .collect::<Vec<_>>();

        replace_links(self.db, entity::ship_tag::Column::ShipId, ship_id, links).await
    }
}
