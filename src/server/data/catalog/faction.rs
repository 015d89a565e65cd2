use std::collections::HashMap;

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::catalog::{load_related, replace_links},
    model::db::{FactionModel, ShipModel, TagModel},
};

pub struct FactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FactionRepository<'a, C> {
    /// Creates a new instance of [`FactionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<FactionModel>, DbErr> {
        entity::prelude::Faction::find()
            .order_by_asc(entity::faction::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<FactionModel>, DbErr> {
        entity::prelude::Faction::find()
            .filter(entity::faction::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Factions with the provided row ids, missing ids are skipped
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<FactionModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Faction::find()
            .filter(entity::faction::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Inserts the faction or, if the slug is already taken, overwrites that row
    pub async fn upsert(
        &self,
        faction: entity::faction::ActiveModel,
    ) -> Result<FactionModel, DbErr> {
        entity::prelude::Faction::insert(faction)
            .on_conflict(
                OnConflict::column(entity::faction::Column::Slug)
                    .update_columns([
                        entity::faction::Column::Name,
                        entity::faction::Column::Alignment,
                        entity::faction::Column::Leader,
                        entity::faction::Column::Purpose,
                        entity::faction::Column::Description,
                        entity::faction::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Tags for each of the provided factions, ordered by name
    pub async fn get_tags(
        &self,
        faction_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TagModel>>, DbErr> {
        load_related::<_, entity::prelude::FactionTag, entity::prelude::Tag, _>(
            self.db,
            entity::faction_tag::Column::FactionId,
            faction_ids,
            entity::tag::Column::Name,
            |link| link.faction_id,
        )
        .await
    }

    /// Ships operated by each of the provided factions, ordered by name
    pub async fn get_ships(
        &self,
        faction_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<ShipModel>>, DbErr> {
        load_related::<_, entity::prelude::FactionShip, entity::prelude::Ship, _>(
            self.db,
            entity::faction_ship::Column::FactionId,
            faction_ids,
            entity::ship::Column::Name,
            |link| link.faction_id,
        )
        .await
    }

    pub async fn set_tags(&self, faction_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        let links = tag_ids
            .iter()
            .map(|tag_id| entity::faction_tag::ActiveModel {
                faction_id: ActiveValue::Set(faction_id),
                tag_id: ActiveValue::Set(*tag_id),
            })
            .collect::<Vec<_>>();

        replace_links(
            self.db,
            entity::faction_tag::Column::FactionId,
            faction_id,
            links,
        )
        .await
    }

    /// Replaces the fleet of a faction
    pub async fn set_ships(&self, faction_id: i32, ship_ids: &[i32]) -> Result<(), DbErr> {
        let links = ship_ids
            .iter()
            .map(|ship_id| entity::faction_ship::ActiveModel {
                faction_id: ActiveValue::Set(faction_id),
                ship_id: ActiveValue::Set(*ship_id),
            })
            .collect::<Vec<_>>();

        replace_links(
            self.db,
            entity::faction_ship::Column::FactionId,
            faction_id,
            links,
        )
        .await
    }
}
