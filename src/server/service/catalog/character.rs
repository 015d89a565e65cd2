use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CharacterInputDto, CharacterSummaryDto},
    server::{
        data::catalog::{
            character::CharacterRepository, faction::FactionRepository, ship::ShipRepository,
        },
        error::{catalog::CatalogError, Error},
        model::db::CharacterModel,
        service::catalog::{distinct_ids, index_refs, take_refs, take_tags},
    },
};

/// Service for reading and editing characters.
///
/// Characters are the only kind with write operations; every write is a single-row
/// statement and runs without a transaction.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every character with primary ship / faction references and tags.
    ///
    /// Ordered by priority descending, then name ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<CharacterSummaryDto>)` - All characters, possibly empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self) -> Result<Vec<CharacterSummaryDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let ship_repo = ShipRepository::new(self.db);
        let faction_repo = FactionRepository::new(self.db);

        let characters = character_repo.list().await?;
        let character_ids: Vec<i32> = characters.iter().map(|c| c.id).collect();

        let mut tags = character_repo.get_tags(&character_ids).await?;
        let ships = index_refs(
            ship_repo
                .get_by_ids(&distinct_ids(characters.iter().map(|c| c.primary_ship_id)))
                .await?,
            |ship| ship.id,
        );
        let factions = index_refs(
            faction_repo
                .get_by_ids(&distinct_ids(
                    characters.iter().map(|c| c.primary_faction_id),
                ))
                .await?,
            |faction| faction.id,
        );

        let summaries = characters
            .into_iter()
            .map(|character| CharacterSummaryDto {
                tags: take_tags(&mut tags, character.id),
                primary_ship: character
                    .primary_ship_id
                    .and_then(|id| ships.get(&id).cloned()),
                primary_faction: character
                    .primary_faction_id
                    .and_then(|id| factions.get(&id).cloned()),
                id: character.id,
                slug: character.slug,
                name: character.name,
                callsign: character.callsign,
                role: character.role,
                species: character.species,
                homeworld: character.homeworld,
                image_url: character.image_url,
                priority: character.priority,
            })
            .collect();

        Ok(summaries)
    }

    /// Retrieves the full dossier of the character with the provided slug.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterDto))` - Character found
    /// - `Ok(None)` - No character has this slug
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_slug(slug).await? {
            Some(character) => Ok(Some(self.detail(character).await?)),
            None => Ok(None),
        }
    }

    /// Retrieves the full dossier of the character with the provided row id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_id(id).await? {
            Some(character) => Ok(Some(self.detail(character).await?)),
            None => Ok(None),
        }
    }

    /// Creates a character.
    ///
    /// `slug` and `name` must be present and not blank; both are stored trimmed.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The created character
    /// - `Err(Error::CatalogError(CatalogError::MissingFields))` - `slug` or `name` missing
    /// - `Err(Error::DbErr)` - Insert failed, e.g. the slug is already taken
    pub async fn create(&self, mut input: CharacterInputDto) -> Result<CharacterDto, Error> {
        let slug = input.slug.take().map(|s| s.trim().to_string());
        let name = input.name.take().map(|n| n.trim().to_string());

        let (slug, name) = match (slug, name) {
            (Some(slug), Some(name)) if !slug.is_empty() && !name.is_empty() => (slug, name),
            _ => return Err(CatalogError::MissingFields("slug and name").into()),
        };

        let character_repo = CharacterRepository::new(self.db);
        let character = character_repo.create(slug, name, input).await?;

        self.detail(character).await
    }

    /// Applies a partial update to the character with the provided row id.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterDto))` - The updated character
    /// - `Ok(None)` - No character has this id
    /// - `Err(Error::DbErr)` - Update failed
    pub async fn update(
        &self,
        id: i32,
        input: CharacterInputDto,
    ) -> Result<Option<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.update(id, input).await? {
            Some(character) => Ok(Some(self.detail(character).await?)),
            None => Ok(None),
        }
    }

    /// Deletes the character with the provided row id.
    ///
    /// # Returns
    /// - `Ok(true)` - The character was deleted
    /// - `Ok(false)` - No character has this id
    /// - `Err(Error::DbErr)` - Delete failed
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let result = character_repo.delete(id).await?;

        Ok(result.rows_affected > 0)
    }

    async fn detail(&self, character: CharacterModel) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let ship_repo = ShipRepository::new(self.db);
        let faction_repo = FactionRepository::new(self.db);

        let ids = [character.id];
        let mut tags = character_repo.get_tags(&ids).await?;
        let mut ships = character_repo.get_ships(&ids).await?;
        let mut factions = character_repo.get_factions(&ids).await?;

        let primary_ship = match character.primary_ship_id {
            Some(ship_id) => ship_repo.get_by_ids(&[ship_id]).await?.pop().map(Into::into),
            None => None,
        };
        let primary_faction = match character.primary_faction_id {
            Some(faction_id) => faction_repo
                .get_by_ids(&[faction_id])
                .await?
                .pop()
                .map(Into::into),
            None => None,
        };

        Ok(CharacterDto {
            tags: take_tags(&mut tags, character.id),
            ships: take_refs(&mut ships, character.id),
            factions: take_refs(&mut factions, character.id),
            primary_ship,
            primary_faction,
            id: character.id,
            slug: character.slug,
            name: character.name,
            callsign: character.callsign,
            role: character.role,
            species: character.species,
            homeworld: character.homeworld,
            bio: character.bio,
            image_url: character.image_url,
            priority: character.priority,
            created_at: character.created_at,
            updated_at: character.updated_at,
        })
    }
}
