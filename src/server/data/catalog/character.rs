use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::character::CharacterInputDto,
    server::{
        data::catalog::{load_related, replace_links},
        model::db::{CharacterModel, FactionModel, ShipModel, TagModel},
    },
};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns all characters, highest priority first and then by name
    pub async fn list(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_desc(entity::character::Column::Priority)
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Characters whose primary ship is `ship_id`, ordered like the character list
    pub async fn get_by_primary_ship(&self, ship_id: i32) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::PrimaryShipId.eq(ship_id))
            .order_by_desc(entity::character::Column::Priority)
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Characters whose primary faction is `faction_id`, ordered like the character list
    pub async fn get_by_primary_faction(
        &self,
        faction_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::PrimaryFactionId.eq(faction_id))
            .order_by_desc(entity::character::Column::Priority)
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Creates a character from validated `slug` and `name` plus the optional input fields
    ///
    /// Priority defaults to 0 when absent from the input.
    pub async fn create(
        &self,
        slug: String,
        name: String,
        input: CharacterInputDto,
    ) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            slug: ActiveValue::Set(slug),
            name: ActiveValue::Set(name),
            callsign: ActiveValue::Set(input.callsign),
            role: ActiveValue::Set(input.role),
            species: ActiveValue::Set(input.species),
            homeworld: ActiveValue::Set(input.homeworld),
            bio: ActiveValue::Set(input.bio),
            image_url: ActiveValue::Set(input.image_url),
            priority: ActiveValue::Set(input.priority.unwrap_or(0)),
            primary_ship_id: ActiveValue::Set(None),
            primary_faction_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Applies a partial update, leaving fields absent from `input` untouched
    ///
    /// `slug` and `name` are trimmed; blank values are treated as absent.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterModel))` - The updated character
    /// - `Ok(None)` - No character with the provided id exists
    /// - `Err(DbErr)` - Query or update failed
    pub async fn update(
        &self,
        id: i32,
        input: CharacterInputDto,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let character = match self.get_by_id(id).await? {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();

        if let Some(slug) = input.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            character_am.slug = ActiveValue::Set(slug.to_string());
        }
        if let Some(name) = input.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            character_am.name = ActiveValue::Set(name.to_string());
        }
        if let Some(callsign) = input.callsign {
            character_am.callsign = ActiveValue::Set(Some(callsign));
        }
        if let Some(role) = input.role {
            character_am.role = ActiveValue::Set(Some(role));
        }
        if let Some(species) = input.species {
            character_am.species = ActiveValue::Set(Some(species));
        }
        if let Some(homeworld) = input.homeworld {
            character_am.homeworld = ActiveValue::Set(Some(homeworld));
        }
        if let Some(bio) = input.bio {
            character_am.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(image_url) = input.image_url {
            character_am.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(priority) = input.priority {
            character_am.priority = ActiveValue::Set(priority);
        }
        character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character, join rows referencing it cascade
    ///
    /// Returns OK regardless of the character existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Inserts the character or, if the slug is already taken, overwrites that row
    ///
    /// The creation timestamp of an existing row is preserved.
    pub async fn upsert(
        &self,
        character: entity::character::ActiveModel,
    ) -> Result<CharacterModel, DbErr> {
        entity::prelude::Character::insert(character)
            .on_conflict(
                OnConflict::column(entity::character::Column::Slug)
                    .update_columns([
                        entity::character::Column::Name,
                        entity::character::Column::Callsign,
                        entity::character::Column::Role,
                        entity::character::Column::Species,
                        entity::character::Column::Homeworld,
                        entity::character::Column::Bio,
                        entity::character::Column::ImageUrl,
                        entity::character::Column::Priority,
                        entity::character::Column::PrimaryShipId,
                        entity::character::Column::PrimaryFactionId,
                        entity::character::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Tags for each of the provided characters, ordered by name
    pub async fn get_tags(
        &self,
        character_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TagModel>>, DbErr> {
        load_related::<_, entity::prelude::CharacterTag, entity::prelude::Tag, _>(
            self.db,
            entity::character_tag::Column::CharacterId,
            character_ids,
            entity::tag::Column::Name,
            |link| link.character_id,
        )
        .await
    }

    /// Every ship each character has served on, ordered by name
    pub async fn get_ships(
        &self,
        character_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<ShipModel>>, DbErr> {
        load_related::<_, entity::prelude::CharacterShip, entity::prelude::Ship, _>(
            self.db,
            entity::character_ship::Column::CharacterId,
            character_ids,
            entity::ship::Column::Name,
            |link| link.character_id,
        )
        .await
    }

    /// Every faction each character belongs to, ordered by name
    pub async fn get_factions(
        &self,
        character_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<FactionModel>>, DbErr> {
        load_related::<_, entity::prelude::CharacterFaction, entity::prelude::Faction, _>(
            self.db,
            entity::character_faction::Column::CharacterId,
            character_ids,
            entity::faction::Column::Name,
            |link| link.character_id,
        )
        .await
    }

    pub async fn set_tags(&self, character_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        let links = tag_ids
            .iter()
            .map(|tag_id| entity::character_tag::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                tag_id: ActiveValue::Set(*tag_id),
            })
            .collect::<Vec<_>>();

        replace_links(
            self.db,
            entity::character_tag::Column::CharacterId,
            character_id,
            links,
        )
        .await
    }

    pub async fn set_ships(&self, character_id: i32, ship_ids: &[i32]) -> Result<(), DbErr> {
        let links = ship_ids
            .iter()
            .map(|ship_id| entity::character_ship::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                ship_id: ActiveValue::Set(*ship_id),
            })
            .collect::<Vec<_>>();

        replace_links(
            self.db,
            entity::character_ship::Column::CharacterId,
            character_id,
            links,
        )
        .await
    }

    pub async fn set_factions(&self, character_id: i32, faction_ids: &[i32]) -> Result<(), DbErr> {
        let links = faction_ids
            .iter()
            .map(|faction_id| entity::character_faction::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                faction_id: ActiveValue::Set(*faction_id),
            })
            .collect::<Vec<_>>();

        replace_links(
            self.db,
            entity::character_faction::Column::CharacterId,
            character_id,
            links,
        )
        .await
    }
}

#[cfg(test)]
mod tests {

    mod list {
        use datacore_test_utils::prelude::*;

        use crate::server::data::catalog::character::CharacterRepository;

        /// Expect characters ordered by priority descending, then name ascending
        #[tokio::test]
        async fn orders_by_priority_then_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            test.catalog()
                .insert_mock_character_with_priority("zed-vale", 0)
                .await?;
            test.catalog()
                .insert_mock_character_with_priority("amos-kell", 0)
                .await?;
            test.catalog()
                .insert_mock_character_with_priority("sora-caddell", 5)
                .await?;

            let character_repo = CharacterRepository::new(&test.db);
            let characters = character_repo.list().await?;

            let slugs: Vec<&str> = characters.iter().map(|c| c.slug.as_str()).collect();
            assert_eq!(slugs, vec!["sora-caddell", "amos-kell", "zed-vale"]);

            Ok(())
        }

        /// Expect an empty list when no characters exist
        #[tokio::test]
        async fn returns_empty_list() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let character_repo = CharacterRepository::new(&test.db);
            let characters = character_repo.list().await?;

            assert!(characters.is_empty());

            Ok(())
        }
    }

    mod get_by_slug {
        use datacore_test_utils::prelude::*;

        use crate::server::data::catalog::character::CharacterRepository;

        /// Expect Some for an existing slug and None otherwise
        #[tokio::test]
        async fn finds_only_existing_slug() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_character("gavin-cross", None, None)
                .build()
                .await?;

            let character_repo = CharacterRepository::new(&test.db);

            let found = character_repo.get_by_slug("gavin-cross").await?;
            assert_eq!(found.map(|c| c.name), Some("Gavin Cross".to_string()));

            let missing = character_repo.get_by_slug("does-not-exist").await?;
            assert!(missing.is_none());

            Ok(())
        }
    }

    mod create {
        use datacore_test_utils::prelude::*;

        use crate::{
            model::character::CharacterInputDto,
            server::data::catalog::character::CharacterRepository,
        };

        /// Expect priority to default to 0 and primary references to be empty
        #[tokio::test]
        async fn creates_with_defaults() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let character_repo = CharacterRepository::new(&test.db);
            let created = character_repo
                .create(
                    "nyx-arden".to_string(),
                    "Nyx Arden".to_string(),
                    CharacterInputDto {
                        callsign: Some("Shade".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(created.priority, 0);
            assert_eq!(created.callsign.as_deref(), Some("Shade"));
            assert_eq!(created.primary_ship_id, None);

            Ok(())
        }

        /// Expect Error when the slug is already taken
        #[tokio::test]
        async fn fails_for_duplicate_slug() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_character("gavin-cross", None, None)
                .build()
                .await?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo
                .create(
                    "gavin-cross".to_string(),
                    "Gavin Cross".to_string(),
                    CharacterInputDto::default(),
                )
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update {
        use datacore_test_utils::prelude::*;

        use crate::{
            model::character::CharacterInputDto,
            server::data::catalog::character::CharacterRepository,
        };

        /// Expect only the provided fields to change
        #[tokio::test]
        async fn keeps_absent_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let character = test
                .catalog()
                .insert_mock_character("gavin-cross", None, None)
                .await?;

            let character_repo = CharacterRepository::new(&test.db);
            let updated = character_repo
                .update(
                    character.id,
                    CharacterInputDto {
                        role: Some("Captain".to_string()),
                        name: Some("  ".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            let updated = updated.expect("character should exist");
            assert_eq!(updated.role.as_deref(), Some("Captain"));
            assert_eq!(updated.name, character.name);
            assert_eq!(updated.species, character.species);
            assert_eq!(updated.slug, character.slug);

            Ok(())
        }

        /// Expect surrounding whitespace to be stripped from slug and name
        #[tokio::test]
        async fn trims_slug_and_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let character = test
                .catalog()
                .insert_mock_character("gavin-cross", None, None)
                .await?;

            let character_repo = CharacterRepository::new(&test.db);
            let updated = character_repo
                .update(
                    character.id,
                    CharacterInputDto {
                        slug: Some(" cross ".to_string()),
                        name: Some("\tGavin Cross ".to_string()),
                        ..Default::default()
                    },
                )
                .await?
                .expect("character should exist");

            assert_eq!(updated.slug, "cross");
            assert_eq!(updated.name, "Gavin Cross");

            Ok(())
        }

        /// Expect None when the character does not exist
        #[tokio::test]
        async fn returns_none_for_missing_id() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let character_repo = CharacterRepository::new(&test.db);
            let updated = character_repo
                .update(42, CharacterInputDto::default())
                .await?;

            assert!(updated.is_none());

            Ok(())
        }
    }

    mod delete {
        use datacore_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::catalog::character::CharacterRepository;

        /// Expect the character and its join rows to be removed
        #[tokio::test]
        async fn deletes_character_and_links() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let tag = test.catalog().insert_mock_tag("crew").await?;
            let character = test
                .catalog()
                .insert_mock_character("gavin-cross", None, None)
                .await?;
            test.catalog().tag_character(character.id, tag.id).await?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo.delete(character.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(character_repo.get_by_id(character.id).await?.is_none());
            let links = entity::prelude::CharacterTag::find().all(&test.db).await?;
            assert!(links.is_empty());

            Ok(())
        }

        /// Expect zero affected rows for a missing id
        #[tokio::test]
        async fn reports_missing_id() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let character_repo = CharacterRepository::new(&test.db);
            let result = character_repo.delete(42).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }

    mod get_tags {
        use datacore_test_utils::prelude::*;

        use crate::server::data::catalog::character::CharacterRepository;

        /// Expect tags grouped per character and ordered by name
        #[tokio::test]
        async fn groups_and_orders_tags() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let pilot = test.catalog().insert_mock_tag("pilot").await?;
            let crew = test.catalog().insert_mock_tag("crew").await?;
            let gavin = test
                .catalog()
                .insert_mock_character("gavin-cross", None, None)
                .await?;
            let sora = test
                .catalog()
                .insert_mock_character("sora-caddell", None, None)
                .await?;
            test.catalog().tag_character(gavin.id, pilot.id).await?;
            test.catalog().tag_character(gavin.id, crew.id).await?;

            let character_repo = CharacterRepository::new(&test.db);
            let tags = character_repo.get_tags(&[gavin.id, sora.id]).await?;

            let names: Vec<&str> = tags[&gavin.id].iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["crew", "pilot"]);
            assert!(!tags.contains_key(&sora.id));

            Ok(())
        }
    }

    mod set_ships {
        use datacore_test_utils::prelude::*;

        use crate::server::data::catalog::character::CharacterRepository;

        /// Expect memberships to be replaced rather than appended
        #[tokio::test]
        async fn replaces_existing_links() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let constellation = test.catalog().insert_mock_ship("the-constellation").await?;
            let drifter = test.catalog().insert_mock_ship("drifter").await?;
            let character = test
                .catalog()
                .insert_mock_character("gavin-cross", None, None)
                .await?;

            let character_repo = CharacterRepository::new(&test.db);
            character_repo
                .set_ships(character.id, &[constellation.id, drifter.id])
                .await?;
            character_repo
                .set_ships(character.id, &[constellation.id])
                .await?;

            let ships = character_repo.get_ships(&[character.id]).await?;
            let slugs: Vec<&str> = ships[&character.id]
                .iter()
                .map(|s| s.slug.as_str())
                .collect();
            assert_eq!(slugs, vec!["the-constellation"]);

            Ok(())
        }
    }

    mod upsert {
        use datacore_test_utils::prelude::*;
        use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

        use crate::server::data::catalog::character::CharacterRepository;

        /// Expect the second upsert to update the existing row instead of inserting
        #[tokio::test]
        async fn updates_existing_slug() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let character_repo = CharacterRepository::new(&test.db);
            let first = character_repo
                .upsert(factory::mock_character("gavin-cross", None, None))
                .await?;

            let mut changed = factory::mock_character("gavin-cross", None, None);
            changed.priority = ActiveValue::Set(10);
            let second = character_repo.upsert(changed).await?;

            assert_eq!(first.id, second.id);
            assert_eq!(second.priority, 10);
            let count = entity::prelude::Character::find().count(&test.db).await?;
            assert_eq!(count, 1);

            Ok(())
        }
    }
}
