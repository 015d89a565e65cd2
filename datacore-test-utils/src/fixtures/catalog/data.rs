//! Catalog database insertion utilities.
//!
//! Insert methods are idempotent per slug (or name for tags): inserting a fixture that
//! already exists returns the existing row instead of violating the unique constraint.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::catalog::{factory, CatalogFixtures},
    model::{
        CharacterModel, EpisodeModel, FactionModel, LocationModel, LoreModel, ShipModel,
        TagModel, TechnologyModel,
    },
};

impl<'a> CatalogFixtures<'a> {
    /// Insert a tag, returning the existing row if the name is taken.
    pub async fn insert_mock_tag(&self, name: &str) -> Result<TagModel, TestError> {
        if let Some(existing) = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(&self.context.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(factory::mock_tag(name).insert(&self.context.db).await?)
    }

    pub async fn insert_mock_ship(&self, slug: &str) -> Result<ShipModel, TestError> {
        if let Some(existing) = entity::prelude::Ship::find()
            .filter(entity::ship::Column::Slug.eq(slug))
            .one(&self.context.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(factory::mock_ship(slug).insert(&self.context.db).await?)
    }

    pub async fn insert_mock_faction(&self, slug: &str) -> Result<FactionModel, TestError> {
        if let Some(existing) = entity::prelude::Faction::find()
            .filter(entity::faction::Column::Slug.eq(slug))
            .one(&self.context.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(factory::mock_faction(slug).insert(&self.context.db).await?)
    }

    /// Insert a character referencing existing primary ship and faction rows.
    ///
    /// # Arguments
    /// - `slug` - Unique slug, the display name is derived from it
    /// - `primary_ship_id` - Row id of the primary ship, which must already exist
    /// - `primary_faction_id` - Row id of the primary faction, which must already exist
    pub async fn insert_mock_character(
        &self,
        slug: &str,
        primary_ship_id: Option<i32>,
        primary_faction_id: Option<i32>,
    ) -> Result<CharacterModel, TestError> {
        if let Some(existing) = entity::prelude::Character::find()
            .filter(entity::character::Column::Slug.eq(slug))
            .one(&self.context.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            factory::mock_character(slug, primary_ship_id, primary_faction_id)
                .insert(&self.context.db)
                .await?,
        )
    }

    /// Insert a character with an explicit priority and no primary references.
    pub async fn insert_mock_character_with_priority(
        &self,
        slug: &str,
        priority: i32,
    ) -> Result<CharacterModel, TestError> {
        let mut character = factory::mock_character(slug, None, None);
        character.priority = ActiveValue::Set(priority);

        Ok(character.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_episode(
        &self,
        slug: &str,
        season: i32,
        episode: i32,
    ) -> Result<EpisodeModel, TestError> {
        Ok(factory::mock_episode(slug, season, episode)
            .insert(&self.context.db)
            .await?)
    }

    pub async fn insert_mock_location(&self, slug: &str) -> Result<LocationModel, TestError> {
        Ok(factory::mock_location(slug)
            .insert(&self.context.db)
            .await?)
    }

    pub async fn insert_mock_technology(
        &self,
        slug: &str,
    ) -> Result<TechnologyModel, TestError> {
        Ok(factory::mock_technology(slug)
            .insert(&self.context.db)
            .await?)
    }

    pub async fn insert_mock_lore(&self, slug: &str) -> Result<LoreModel, TestError> {
        Ok(factory::mock_lore(slug).insert(&self.context.db).await?)
    }

    pub async fn tag_character(&self, character_id: i32, tag_id: i32) -> Result<(), TestError> {
        entity::prelude::CharacterTag::insert(entity::character_tag::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    pub async fn tag_ship(&self, ship_id: i32, tag_id: i32) -> Result<(), TestError> {
        entity::prelude::ShipTag::insert(entity::ship_tag::ActiveModel {
            ship_id: ActiveValue::Set(ship_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    pub async fn tag_faction(&self, faction_id: i32, tag_id: i32) -> Result<(), TestError> {
        entity::prelude::FactionTag::insert(entity::faction_tag::ActiveModel {
            faction_id: ActiveValue::Set(faction_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    pub async fn tag_episode(&self, episode_id: i32, tag_id: i32) -> Result<(), TestError> {
        entity::prelude::EpisodeTag::insert(entity::episode_tag::ActiveModel {
            episode_id: ActiveValue::Set(episode_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    pub async fn tag_location(&self, location_id: i32, tag_id: i32) -> Result<(), TestError> {
        entity::prelude::LocationTag::insert(entity::location_tag::ActiveModel {
            location_id: ActiveValue::Set(location_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    pub async fn tag_technology(
        &self,
        technology_id: i32,
        tag_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::TechnologyTag::insert(entity::technology_tag::ActiveModel {
            technology_id: ActiveValue::Set(technology_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    pub async fn tag_lore(&self, lore_id: i32, tag_id: i32) -> Result<(), TestError> {
        entity::prelude::LoreTag::insert(entity::lore_tag::ActiveModel {
            lore_id: ActiveValue::Set(lore_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    /// Record that a character has served on a ship (secondary membership).
    pub async fn link_character_ship(
        &self,
        character_id: i32,
        ship_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::CharacterShip::insert(entity::character_ship::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            ship_id: ActiveValue::Set(ship_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    /// Record that a character belongs to a faction (secondary membership).
    pub async fn link_character_faction(
        &self,
        character_id: i32,
        faction_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::CharacterFaction::insert(entity::character_faction::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            faction_id: ActiveValue::Set(faction_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    pub async fn link_faction_ship(&self, faction_id: i32, ship_id: i32) -> Result<(), TestError> {
        entity::prelude::FactionShip::insert(entity::faction_ship::ActiveModel {
            faction_id: ActiveValue::Set(faction_id),
            ship_id: ActiveValue::Set(ship_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }

    /// Add a character to an episode's main cast.
    pub async fn add_to_cast(&self, episode_id: i32, character_id: i32) -> Result<(), TestError> {
        entity::prelude::EpisodeCast::insert(entity::episode_cast::ActiveModel {
            episode_id: ActiveValue::Set(episode_id),
            character_id: ActiveValue::Set(character_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }
}
