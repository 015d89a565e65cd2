use sea_orm::DatabaseConnection;

use crate::{
    model::ship::{CrewMemberDto, ShipDto, ShipSummaryDto},
    server::{
        data::catalog::{
            character::CharacterRepository, faction::FactionRepository, ship::ShipRepository,
        },
        error::Error,
        service::catalog::{distinct_ids, index_refs, take_refs, take_tags},
    },
};

pub struct ShipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipService<'a> {
    /// Creates a new instance of [`ShipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every ship with its tags, ordered by name.
    pub async fn list(&self) -> Result<Vec<ShipSummaryDto>, Error> {
        let ship_repo = ShipRepository::new(self.db);

        let ships = ship_repo.list().await?;
        let ship_ids: Vec<i32> = ships.iter().map(|s| s.id).collect();
        let mut tags = ship_repo.get_tags(&ship_ids).await?;

        Ok(ships
            .into_iter()
            .map(|ship| ShipSummaryDto {
                tags: take_tags(&mut tags, ship.id),
                id: ship.id,
                slug: ship.slug,
                name: ship.name,
                nickname: ship.nickname,
                registry: ship.registry,
                ship_type: ship.ship_type,
                image_url: ship.image_url,
            })
            .collect())
    }

    /// Retrieves a ship with its primary crew, operating factions and tags.
    ///
    /// The crew is every character whose primary ship is this one, ordered by priority
    /// descending then name, each with a reference to their own primary faction.
    ///
    /// # Returns
    /// - `Ok(Some(ShipDto))` - Ship found
    /// - `Ok(None)` - No ship has this slug
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ShipDto>, Error> {
        let ship_repo = ShipRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let faction_repo = FactionRepository::new(self.db);

        let ship = match ship_repo.get_by_slug(slug).await? {
            Some(ship) => ship,
            None => return Ok(None),
        };

        let crew = character_repo.get_by_primary_ship(ship.id).await?;
        let crew_factions = index_refs(
            faction_repo
                .get_by_ids(&distinct_ids(crew.iter().map(|c| c.primary_faction_id)))
                .await?,
            |faction| faction.id,
        );
        let primary_crew = crew
            .into_iter()
            .map(|member| CrewMemberDto {
                primary_faction: member
                    .primary_faction_id
                    .and_then(|id| crew_factions.get(&id).cloned()),
                slug: member.slug,
                name: member.name,
                callsign: member.callsign,
                role: member.role,
            })
            .collect();

        let mut tags = ship_repo.get_tags(&[ship.id]).await?;
        let mut factions = ship_repo.get_factions(&[ship.id]).await?;

        Ok(Some(ShipDto {
            primary_crew,
            factions: take_refs(&mut factions, ship.id),
            tags: take_tags(&mut tags, ship.id),
            id: ship.id,
            slug: ship.slug,
            name: ship.name,
            nickname: ship.nickname,
            registry: ship.registry,
            manufacturer: ship.manufacturer,
            model: ship.ship_model,
            ship_type: ship.ship_type,
            year_built: ship.year_built,
            specs: ship.specs,
            history: ship.history,
            image_url: ship.image_url,
            created_at: ship.created_at,
            updated_at: ship.updated_at,
        }))
    }
}
